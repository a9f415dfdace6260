//! `registrar-core` — process configuration shared by the registrar crates.
//!
//! This crate contains no HTTP or analytics code; it only knows how to turn the
//! process environment into typed [`Settings`].

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::Settings;
