use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Toggle control with id=\"{0}\" not found or not a checkbox input")]
    MissingControl(String),
    #[error("Preference store is unavailable")]
    StoreUnavailable,
    #[error("Unknown theme \"{0}\", expected \"light\" or \"dark\"")]
    UnknownTheme(String),
    #[error("Could not set theme attribute: {0}")]
    Attribute(String),
}

pub type Result<T> = core::result::Result<T, ThemeError>;
