//! Facade crate for Verso features and shared modules.
//! Re-exports domain/kernel primitives and aggregates the feature routers.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `verso` and call [`api_router`] to get every versioned feature route;
//!   extend the body as new slices appear.

pub use verso_domain as domain;
pub use verso_kernel as kernel;

use utoipa_axum::router::OpenApiRouter;

/// Feature registry for runtime introspection.
pub mod features {
    pub use verso_person as person;
    pub use verso_session as session;

    /// Features compiled into this build.
    pub const ENABLED: &[&str] = &["person", "session"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub mod server {
    pub mod router {
        pub use verso_kernel::server::router::system_router;
    }
}

/// Every versioned feature route, merged into one router.
#[must_use]
pub fn api_router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::new().merge(features::person::router()).merge(features::session::router())
}
