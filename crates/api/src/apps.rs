//! Installed-app registry and startup hooks.
//!
//! Each installed app gets exactly one `ready` call during bootstrap, before
//! the HTTP listener is bound. Hooks receive an [`AppContext`] rather than
//! reaching for globals, so tests can hand them a private analytics client.

use registrar_analytics::AnalyticsClient;
use registrar_core::Settings;
use thiserror::Error;

/// Registry-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("app already registered: {0}")]
    DuplicateApp(&'static str),
}

/// Everything a startup hook may read or configure.
#[derive(Clone, Copy)]
pub struct AppContext<'a> {
    settings: &'a Settings,
    analytics: &'a AnalyticsClient,
}

impl<'a> AppContext<'a> {
    pub fn new(settings: &'a Settings, analytics: &'a AnalyticsClient) -> Self {
        Self {
            settings,
            analytics,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn analytics(&self) -> &'a AnalyticsClient {
        self.analytics
    }
}

/// An installed application with an optional startup hook.
pub trait AppConfig: Send + Sync {
    /// Dotted, unique app name.
    fn name(&self) -> &'static str;

    /// Human-readable name.
    fn verbose_name(&self) -> &'static str;

    /// Called once at startup after settings are loaded.
    fn ready(&self, _ctx: &AppContext<'_>) {}
}

/// Config for the api app.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiConfig;

impl ApiConfig {
    pub const NAME: &'static str = "registrar.apps.api";
}

impl AppConfig for ApiConfig {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn verbose_name(&self) -> &'static str {
        "API"
    }

    /// Hand the analytics write key to the analytics client, if one is configured.
    fn ready(&self, ctx: &AppContext<'_>) {
        match ctx.settings().segment_key() {
            Some(key) => {
                ctx.analytics().set_write_key(key);
                tracing::info!(app = self.name(), "analytics enabled");
            }
            None => {
                tracing::debug!(app = self.name(), "no analytics write key; analytics disabled");
            }
        }
    }
}

/// Ordered set of installed apps.
#[derive(Default)]
pub struct AppRegistry {
    apps: Vec<Box<dyn AppConfig>>,
    ready: bool,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every app the registrar installs.
    pub fn installed() -> Self {
        Self {
            apps: vec![Box::new(ApiConfig)],
            ready: false,
        }
    }

    pub fn register<A>(&mut self, app: A) -> Result<&mut Self, RegistryError>
    where
        A: AppConfig + 'static,
    {
        if self.get(app.name()).is_some() {
            return Err(RegistryError::DuplicateApp(app.name()));
        }
        self.apps.push(Box::new(app));
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&dyn AppConfig> {
        self.apps
            .iter()
            .find(|app| app.name() == name)
            .map(|app| &**app)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.apps.iter().map(|app| app.name()).collect()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Run every app's `ready` hook in registration order.
    ///
    /// Returns `false` (and runs nothing) if the registry was already populated.
    pub fn populate(&mut self, ctx: &AppContext<'_>) -> bool {
        if self.ready {
            return false;
        }

        for app in &self.apps {
            tracing::debug!(app = app.name(), "running ready hook");
            app.ready(ctx);
        }

        self.ready = true;
        true
    }
}
