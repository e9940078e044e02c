//! Person feature slice.
//!
//! Three API versions of one resource, showing how the schema evolves while
//! old versions keep working: v1 carries a single display name, v2 splits it
//! into first/last, v3 adds an email address. v2 additionally registers the
//! literal `/api/v2/person/1` route next to `/api/v2/person/{id}`; the router
//! prefers the static segment, which is the whole point of that route.
//!
//! Handlers serve canned sample data; there is no store behind them.

mod v1;
mod v2;
mod v3;

use utoipa_axum::router::OpenApiRouter;

/// Every version of the person routes, merged.
#[must_use]
pub fn router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::new().merge(v1::router()).merge(v2::router()).merge(v3::router())
}
