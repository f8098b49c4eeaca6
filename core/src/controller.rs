use crate::host::*;
use crate::theme::Theme;

/// Keeps the document theme and the toggle in agreement with the resolved preference.
///
/// The resolved preference is the stored user choice when there is one, otherwise the color scheme signal. Whether the
/// user has chosen is always asked from the store, never cached here.
#[derive(Debug)]
pub struct ThemeController<S, T, P, C> {
    sink: S,
    toggle: T,
    store: P,
    signal: C,
}

impl<S, T, P, C> ThemeController<S, T, P, C>
where
    S: ThemeSink,
    T: ToggleControl,
    P: PreferenceStore,
    C: ColorSchemeSignal,
{
    pub const fn new(sink: S, toggle: T, store: P, signal: C) -> Self {
        Self {
            sink,
            toggle,
            store,
            signal,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn toggle(&self) -> &T {
        &self.toggle
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// The explicit choice, if the store holds a recognizable one.
    pub fn user_choice(&self) -> Option<Theme> {
        match self.store.load() {
            Ok(Some(value)) => match value.parse() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::warn!("ignoring stored theme: {}", err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("{}, falling back to system preference", err);
                None
            }
        }
    }

    /// `None` means neither a stored choice nor a dark system preference, the page keeps its default look.
    pub fn resolve(&self) -> Option<Theme> {
        self.user_choice()
            .or_else(|| self.signal.prefers_dark().then_some(Theme::Dark))
    }

    pub fn initialize(&mut self) -> Option<Theme> {
        let resolved = self.resolve();
        log::debug!("initial theme: {:?}", resolved);
        if let Some(theme) = resolved {
            self.apply(theme);
        }
        self.toggle.set_checked(resolved.is_some_and(Theme::is_dark));
        resolved
    }

    pub fn on_toggle_changed(&mut self, checked: bool) -> Theme {
        let theme = Theme::from_dark(checked);
        log::debug!("toggle changed: {}", theme);
        self.apply(theme);
        self.toggle.set_checked(checked);
        if let Err(err) = self.store.save(theme.scheme()) {
            log::warn!("could not persist theme: {}", err);
        }
        theme
    }

    /// Follows the system signal only while the user has not chosen, returns the applied theme.
    pub fn on_system_preference_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if let Some(choice) = self.user_choice() {
            log::debug!(
                "system prefers dark: {}, keeping user choice {}",
                prefers_dark,
                choice
            );
            return None;
        }
        let theme = Theme::from_dark(prefers_dark);
        log::debug!("system theme changed: {}", theme);
        self.apply(theme);
        self.toggle.set_checked(prefers_dark);
        Some(theme)
    }

    fn apply(&mut self, theme: Theme) {
        if let Err(err) = self.sink.apply(theme) {
            log::error!("failed to set theme: {}", err);
        }
    }
}
