//! Typed process settings, read once at startup.

use std::net::SocketAddr;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the analytics (Segment) write key.
pub const SEGMENT_KEY_VAR: &str = "SEGMENT_KEY";

/// Environment variable holding the HTTP listen address.
pub const BIND_ADDR_VAR: &str = "REGISTRAR_BIND_ADDR";

/// Listen address used when [`BIND_ADDR_VAR`] is unset or empty.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings for the registrar API process.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    segment_key: Option<String>,
    bind_addr: SocketAddr,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// An empty `SEGMENT_KEY` is treated the same as an unset one.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let segment_key = lookup(SEGMENT_KEY_VAR).filter(|k| !k.is_empty());

        let raw_addr = lookup(BIND_ADDR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid_bind_addr(BIND_ADDR_VAR, raw_addr.clone(), e))?;

        if segment_key.is_none() {
            tracing::debug!("{SEGMENT_KEY_VAR} not set; analytics disabled");
        }

        Ok(Self {
            segment_key,
            bind_addr,
        })
    }

    /// Analytics write key, if configured.
    pub fn segment_key(&self) -> Option<&str> {
        self.segment_key.as_deref()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn with_segment_key(mut self, key: Option<String>) -> Self {
        self.segment_key = key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            segment_key: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

// The write key is a credential; keep it out of logs.
impl core::fmt::Debug for Settings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Settings")
            .field("segment_key", &self.segment_key.as_ref().map(|_| "<redacted>"))
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}
