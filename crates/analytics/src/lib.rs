//! `registrar-analytics` — handle to the third-party analytics client.
//!
//! Only the configuration surface the registrar touches is modelled here: the
//! write key that authenticates this process to the analytics service. Event
//! delivery belongs to the analytics library itself.

use std::sync::{LazyLock, RwLock};

static GLOBAL: LazyLock<AnalyticsClient> = LazyLock::new(AnalyticsClient::new);

/// Process-wide analytics client used by request handlers.
pub fn global() -> &'static AnalyticsClient {
    &GLOBAL
}

/// Analytics client configuration handle.
#[derive(Debug, Default)]
pub struct AnalyticsClient {
    write_key: RwLock<Option<String>>,
}

impl AnalyticsClient {
    /// Create a client with no write key (analytics disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the write key. Later calls replace the previous key.
    pub fn set_write_key(&self, key: impl Into<String>) {
        let mut slot = self
            .write_key
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(key.into());
        tracing::debug!("analytics write key configured");
    }

    /// Current write key, if one was configured.
    pub fn write_key(&self) -> Option<String> {
        self.write_key
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// True once a write key has been set.
    pub fn is_enabled(&self) -> bool {
        self.write_key
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}
