//! Build metadata captured at packaging time and surfaced at runtime.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stamp compiled in when the build script did not provide one.
///
/// A running binary reporting this value was packaged without the
/// stamping step; `BuildInfo::is_placeholder` makes that detectable.
pub const PLACEHOLDER_BUILD_TIME: &str = "1970-01-01T00:00:00Z";

/// Build-time facts about the running binary.
///
/// Written once during packaging, read once at startup, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Package name.
    pub name: String,
    /// Package version.
    pub version: String,
    /// Build timestamp, RFC 3339 in UTC.
    pub build_time: String,
}

impl BuildInfo {
    /// Assembles the record from compile-time values.
    ///
    /// `build_time` is the stamped env var (`option_env!`); absent stamps fall
    /// back to [`PLACEHOLDER_BUILD_TIME`].
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        build_time: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            build_time: build_time.unwrap_or(PLACEHOLDER_BUILD_TIME).to_owned(),
        }
    }

    /// Whether the record still carries the compiled-in placeholder stamp.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.build_time == PLACEHOLDER_BUILD_TIME
    }

    /// The parsed build timestamp, `None` when the stamp is malformed.
    #[must_use]
    pub fn build_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.build_time).ok()
    }
}
