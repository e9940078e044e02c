//! Kernel utilities shared across slices.
//! Keep this crate focused; it provides config loading, the shared server state,
//! the versioned-routing core and the documentation engine.
//!
//! ## Config loading
//! ```rust,ignore
//! use verso_kernel::config::load_config;
//! let cfg: verso_domain::config::ApiConfig = load_config(Some("server")).unwrap();
//! ```
//!
//! ## Version resolution
//! ```rust,ignore
//! let table = RouteTable::from_openapi(&openapi);
//! let version = table.resolve("api", ApiVersion::Latest, &["person"]);
//! ```

pub mod build_info;
pub mod config;
pub mod docs;
pub mod routing;
pub mod server;

pub use verso_domain as domain;
