//! Host facilities the controller is wired to.
//!
//! In the browser these are the `<html>` element, a checkbox, `localStorage` and a `matchMedia` query. Tests plug in
//! plain in-memory versions.

use crate::error::*;
use crate::theme::Theme;
use alloc::string::String;

/// Where the active theme gets written, usually an attribute on the document element.
pub trait ThemeSink {
    fn apply(&mut self, theme: Theme) -> Result<()>;
}

/// Checkbox-like control mirroring whether the dark theme is active.
pub trait ToggleControl {
    fn is_checked(&self) -> bool;
    fn set_checked(&mut self, checked: bool);
}

/// Durable slot holding the user's explicit choice as a raw string.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, value: &str) -> Result<()>;
}

/// Live "operating system prefers dark" signal.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}
