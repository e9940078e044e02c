//! Session feature slice.
//!
//! Registered at v1 only, so requests for any newer version (or `latest`)
//! exercise the cross-resource fallback. The documentation engine marks every
//! session operation with the bearer requirement; the handlers themselves
//! enforce nothing.

mod v1;

use utoipa_axum::router::OpenApiRouter;

/// The session routes.
#[must_use]
pub fn router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    v1::router()
}
