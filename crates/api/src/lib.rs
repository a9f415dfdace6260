//! HTTP API shell for the registrar: app initialization and versioned routing.

pub mod app;
pub mod apps;
