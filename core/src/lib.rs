#![no_std]

extern crate alloc;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use host::*;
pub use theme::*;

mod config;
mod controller;
mod error;
mod host;
mod theme;
