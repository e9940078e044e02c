//! The versioned-routing core.
//!
//! Routes are registered at concrete versions (`/api/v2/person`). A request may
//! name any version, or `latest`; it is served by the newest registered route
//! whose version does not exceed the requested one. Exact-version requests are
//! routed directly; everything else is resolved in the router's fallback via a
//! URI rewrite and one re-dispatch.

pub mod pattern;
pub mod rewrite;
pub mod table;

pub use rewrite::with_version_fallback;
pub use table::RouteTable;
