//! Configuration error model.

use thiserror::Error;

/// Result type used while loading configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-level error.
///
/// A missing analytics write key is not an error; it disables analytics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The listen address could not be parsed as `host:port`.
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_bind_addr(
        var: &'static str,
        value: impl Into<String>,
        reason: impl core::fmt::Display,
    ) -> Self {
        Self::InvalidBindAddr {
            var,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
