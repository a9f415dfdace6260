//! HTTP API application wiring (Axum router).
//!
//! - `routes/`: the versioned route table and its handlers
//! - `dto.rs`: response bodies
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Router};
use registrar_analytics::AnalyticsClient;
use registrar_core::Settings;

use crate::apps::{AppContext, AppRegistry};

pub mod dto;
pub mod errors;
pub mod routes;

/// Path under which the versioned API is mounted.
pub const API_MOUNT: &str = "/api";

/// Build the full HTTP router.
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::api_versions().mount_at(API_MOUNT))
}

/// Process startup: run every installed app's `ready` hook against the
/// process-wide analytics client, then build the router (used by `main.rs`).
pub fn bootstrap(settings: &Settings) -> Router {
    bootstrap_with(settings, registrar_analytics::global())
}

/// [`bootstrap`] against an explicit analytics client.
pub fn bootstrap_with(settings: &Settings, analytics: &AnalyticsClient) -> Router {
    let mut apps = AppRegistry::installed();
    apps.populate(&AppContext::new(settings, analytics));
    build_app()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn api_v1_slash_reaches_v1_table() {
        let (status, body) = get(build_app(), "/api/v1/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "no v1 route matches /api/v1/");
    }

    #[tokio::test]
    async fn api_v1_without_slash_is_not_a_version() {
        let (status, body) = get(build_app(), "/api/v1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown_api_version");
    }

    #[tokio::test]
    async fn api_root_is_answered_by_root_table() {
        for uri in ["/api/", "/api"] {
            let (status, body) = get(build_app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["error"], "unknown_api_version", "{uri}");
        }
    }

    #[tokio::test]
    async fn health_sits_outside_the_api_mount() {
        let (status, _) = get(build_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(build_app(), "/elsewhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn bootstrap_with_configures_analytics_and_serves() {
        let settings = Settings::default().with_segment_key(Some("wk_boot".into()));
        let analytics = AnalyticsClient::new();

        let app = bootstrap_with(&settings, &analytics);

        assert_eq!(analytics.write_key().as_deref(), Some("wk_boot"));
        let (status, body) = get(app, "/api/v1/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "v1");
    }
}
