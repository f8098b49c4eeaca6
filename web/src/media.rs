use gloo::utils::window;
use themeswitch_core::{ColorSchemeSignal, ThemeConfig};
use web_sys::MediaQueryList;

/// `prefers-color-scheme: dark` as reported by `matchMedia`.
///
/// Hosts without `matchMedia` get a signal that never prefers dark and has nothing to subscribe to.
#[derive(Clone, Debug)]
pub struct MediaSignal {
    query: Option<MediaQueryList>,
}

impl MediaSignal {
    pub fn new() -> Self {
        Self::with_query(ThemeConfig::DARK_SCHEME_QUERY)
    }

    pub fn with_query(media: &str) -> Self {
        let query = match window().match_media(media) {
            Ok(query) => query,
            Err(err) => {
                log::warn!("matchMedia({}) failed: {:?}", media, err);
                None
            }
        };
        Self { query }
    }

    pub fn query(&self) -> Option<&MediaQueryList> {
        self.query.as_ref()
    }
}

impl Default for MediaSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for MediaSignal {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }
}
