//! Version 1 of the API.

use axum::{extract::OriginalUri, response::Response, routing::get, Json, Router};

use crate::app::{dto::VersionStatus, errors};

/// Path prefix this table is mounted under.
pub const PREFIX: &str = "v1";

/// Routes served under `v1/`.
pub fn router() -> Router {
    Router::new()
        .route("/status", get(status))
        .fallback(not_found)
}

async fn status() -> Json<VersionStatus> {
    Json(VersionStatus {
        namespace: format!("{}:{PREFIX}", super::APP_NAME),
        version: PREFIX.to_string(),
    })
}

async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    errors::not_found("not_found", format!("no {PREFIX} route matches {}", uri.path()))
}
