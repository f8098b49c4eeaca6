use gloo::utils::window;
use themeswitch_core::*;
use web_sys::Storage;

/// One `localStorage` slot holding the raw `"light"`/`"dark"` string.
///
/// When the browser refuses access to `localStorage` the store is detached: it reads as empty and drops writes, so the
/// page keeps following the system preference.
#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        let storage = match window().local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage is not available, theme choice will not persist");
                None
            }
            Err(err) => {
                log::warn!("localStorage is blocked ({:?}), theme choice will not persist", err);
                None
            }
        };
        Self {
            key: key.into(),
            storage,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(&self.key)
                .map_err(|_| ThemeError::StoreUnavailable),
            None => Ok(None),
        }
    }

    fn save(&mut self, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage
                .set_item(&self.key, value)
                .map_err(|_| ThemeError::StoreUnavailable),
            None => Ok(()),
        }
    }
}
