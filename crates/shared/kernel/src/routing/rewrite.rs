//! Version resolution for requests that matched no exact route.
//!
//! Routes exist only at concrete versions, so an exact-version request is
//! dispatched by the router directly. Everything else (`latest`, a newer
//! version than the newest registration, or garbage) lands in the router's
//! fallback, which rewrites the URI to the resolved version and re-dispatches
//! once. The dispatch target carries no fallback of its own, so an
//! unresolvable rewrite cannot recurse.

use super::table::RouteTable;
use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::{debug, warn};
use verso_domain::version::ApiVersion;

/// Attaches the version-resolution fallback to a fully built router.
#[must_use]
pub fn with_version_fallback(router: Router, table: Arc<RouteTable>) -> Router {
    let dispatch = router.clone();
    router.fallback(move |req: Request| {
        let table = Arc::clone(&table);
        let dispatch = dispatch.clone();
        async move { resolve_fallback(&table, dispatch, req).await }
    })
}

/// Resolves the requested version, rewrites the URI and re-dispatches.
///
/// Requests the table cannot resolve are a plain 404.
async fn resolve_fallback(table: &RouteTable, dispatch: Router, mut req: Request) -> Response {
    let Some(uri) = rewritten_uri(table, req.uri()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    debug!(from = %req.uri(), to = %uri, "Resolved API version");
    *req.uri_mut() = uri;

    match dispatch.oneshot(req).await {
        Ok(response) => response,
        Err(err) => match err {},
    }
}

/// The rewritten request URI, or `None` when the request cannot be resolved.
#[must_use]
pub fn rewritten_uri(table: &RouteTable, uri: &Uri) -> Option<Uri> {
    let segments: Vec<&str> =
        uri.path().trim_start_matches('/').split('/').filter(|s| !s.is_empty()).collect();

    let scope = *segments.first()?;
    if !table.has_scope(scope) {
        return None;
    }
    let requested: ApiVersion = segments.get(1)?.parse().ok()?;
    let tail = &segments[2..];

    let resolved = table.resolve(scope, requested, tail)?;

    let mut target = format!("/{scope}/v{resolved}");
    for part in tail {
        target.push('/');
        target.push_str(part);
    }
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }

    match target.parse() {
        Ok(uri) => Some(uri),
        Err(err) => {
            warn!(%err, "Rewritten URI is invalid, treating the request as unresolvable");
            None
        }
    }
}
