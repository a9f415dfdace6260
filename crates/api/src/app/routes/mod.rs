//! Root API routes.
//!
//! Every API route is versioned: the root table only holds one entry per
//! active API version, and each entry delegates to that version's own table.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceExt;

use crate::app::errors;

pub mod system;
pub mod v1;

/// Namespace that reversed route names are qualified with (`api:v1`).
pub const APP_NAME: &str = "api";

/// One entry of the root table: a path prefix and the routes it delegates to.
#[derive(Clone, Copy)]
pub struct ApiVersion {
    prefix: &'static str,
    routes: fn() -> Router,
}

impl ApiVersion {
    pub const fn new(prefix: &'static str, routes: fn() -> Router) -> Self {
        Self { prefix, routes }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn namespace(&self) -> String {
        format!("{APP_NAME}:{}", self.prefix)
    }

    /// True if `path` starts with `<prefix>/`, optionally after a single leading `/`.
    pub fn matches(&self, path: &str) -> bool {
        self.tail(path).is_some()
    }

    /// The part of `path` after `<prefix>/`.
    fn tail<'p>(&self, path: &'p str) -> Option<&'p str> {
        let path = path.strip_prefix('/').unwrap_or(path);
        path.strip_prefix(self.prefix)?.strip_prefix('/')
    }
}

impl core::fmt::Debug for ApiVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiVersion")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Ordered table of API versions.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    versions: Vec<ApiVersion>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version. Earlier entries win when prefixes collide.
    pub fn with(mut self, version: ApiVersion) -> Self {
        self.versions.push(version);
        self
    }

    pub fn prefixes(&self) -> Vec<&'static str> {
        self.versions.iter().map(ApiVersion::prefix).collect()
    }

    /// The first entry whose prefix matches `path`.
    pub fn resolve(&self, path: &str) -> Option<&ApiVersion> {
        self.lookup(path).map(|(idx, _)| &self.versions[idx])
    }

    fn lookup<'p>(&self, path: &'p str) -> Option<(usize, &'p str)> {
        self.versions
            .iter()
            .enumerate()
            .find_map(|(idx, v)| v.tail(path).map(|tail| (idx, tail)))
    }

    /// Router answering paths relative to the table root.
    pub fn into_router(self) -> Router {
        self.mount_at("")
    }

    /// Router answering paths under `mount` (e.g. `/api`); `""` mounts at the root.
    ///
    /// Every request under the mount is dispatched through [`RouteTable::resolve`],
    /// so the router and the table agree on what a version prefix matches.
    pub fn mount_at(self, mount: &'static str) -> Router {
        for (idx, version) in self.versions.iter().enumerate() {
            if self.versions[..idx].iter().any(|v| v.prefix == version.prefix) {
                tracing::warn!(prefix = version.prefix, "duplicate API version prefix is unreachable");
            }
        }

        let routers = self.versions.iter().map(|v| (v.routes)()).collect();
        let api = VersionedApi {
            mount,
            table: Arc::new(self),
            routers: Arc::new(routers),
        };

        Router::new().fallback(dispatch).with_state(api)
    }
}

#[derive(Clone)]
struct VersionedApi {
    mount: &'static str,
    table: Arc<RouteTable>,
    // Index-aligned with `table.versions`.
    routers: Arc<Vec<Router>>,
}

impl VersionedApi {
    /// Path relative to the mount, or `None` if `path` is outside it.
    fn strip_mount<'p>(&self, path: &'p str) -> Option<&'p str> {
        let rest = path.strip_prefix(self.mount)?;
        (rest.is_empty() || rest.starts_with('/') || self.mount.is_empty()).then_some(rest)
    }
}

async fn dispatch(State(api): State<VersionedApi>, mut req: Request) -> Response {
    let path = req.uri().path().to_string();

    let Some(rest) = api.strip_mount(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let Some((idx, tail)) = api.table.lookup(rest) else {
        return unknown_version(&path);
    };

    let Some(uri) = forward_uri(req.uri(), tail) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_path", format!("cannot route {path}"));
    };
    *req.uri_mut() = uri;

    let router = api.routers[idx].clone();
    router.oneshot(req).await.unwrap_or_else(|never| match never {})
}

/// `tail` as an origin-form URI, keeping the original query string.
fn forward_uri(uri: &Uri, tail: &str) -> Option<Uri> {
    let target = match uri.query() {
        Some(query) => format!("/{tail}?{query}"),
        None => format!("/{tail}"),
    };
    target.parse().ok()
}

/// The active API versions, in match order.
pub fn api_versions() -> RouteTable {
    RouteTable::new().with(ApiVersion::new(v1::PREFIX, v1::router))
}

/// Router for the whole versioned API, rooted at `/`.
pub fn router() -> Router {
    api_versions().into_router()
}

fn unknown_version(path: &str) -> Response {
    errors::not_found("unknown_api_version", format!("no API version serves {path}"))
}
