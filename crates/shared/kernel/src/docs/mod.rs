//! Documentation engine.
//!
//! The generated OpenAPI document is decorated with the service-wide
//! conventions (info section, caller headers, security scheme), then split
//! into per-version groups, each showing the effective API surface of that
//! version. All documents are computed once at router construction; nothing
//! here holds further state.

mod decorate;
mod groups;
mod serve;

pub use decorate::decorate;
pub use groups::{DocGroups, GroupSummary};
pub use serve::router;
