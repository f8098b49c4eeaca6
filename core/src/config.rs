use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Names of the page elements and storage slot the controller binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
}

impl ThemeConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "theme";
    pub const DEFAULT_ATTR_NAME: &'static str = "data-bs-theme";
    pub const DEFAULT_TOGGLE_ID: &'static str = "darkModeSwitch";
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            attribute: Self::DEFAULT_ATTR_NAME.to_string(),
            toggle_id: Self::DEFAULT_TOGGLE_ID.to_string(),
        }
    }
}
