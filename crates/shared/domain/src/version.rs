//! API version labels as they appear in request paths (`v1`, `v2`, ..., `latest`).

use std::fmt;
use std::str::FromStr;

/// Numeric version segments carry at most two digits (`v1`..`v99`).
const MAX_VERSION_DIGITS: usize = 2;

/// A version selector taken from the second path segment of a versioned route.
///
/// `Latest` orders above every numbered version, so the derived `Ord`
/// gives the resolution order directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiVersion {
    Numbered(u8),
    Latest,
}

impl ApiVersion {
    pub const LATEST_LABEL: &'static str = "latest";

    /// The concrete version number, if this is not `latest`.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Numbered(n) => Some(n),
            Self::Latest => None,
        }
    }

    /// Whether a route registered at `candidate` may serve a request for this version.
    ///
    /// A request never reaches a version newer than the one it asked for;
    /// `latest` accepts everything.
    #[must_use]
    pub const fn covers(self, candidate: u8) -> bool {
        match self {
            Self::Numbered(n) => candidate <= n,
            Self::Latest => true,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbered(n) => write!(f, "v{n}"),
            Self::Latest => f.write_str(Self::LATEST_LABEL),
        }
    }
}

/// The segment is neither `latest` nor `v` followed by one or two digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an API version segment: {0:?}")]
pub struct InvalidVersion(pub String);

impl FromStr for ApiVersion {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::LATEST_LABEL {
            return Ok(Self::Latest);
        }

        let digits = s.strip_prefix('v').unwrap_or_default();
        if digits.is_empty()
            || digits.len() > MAX_VERSION_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidVersion(s.to_owned()));
        }

        digits.parse().map(Self::Numbered).map_err(|_| InvalidVersion(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_and_latest() {
        assert_eq!("v1".parse(), Ok(ApiVersion::Numbered(1)));
        assert_eq!("v42".parse(), Ok(ApiVersion::Numbered(42)));
        assert_eq!("latest".parse(), Ok(ApiVersion::Latest));
    }

    #[test]
    fn rejects_malformed_segments() {
        for s in ["", "v", "v100", "v1a", "V1", "1", "latest2", "vv2"] {
            assert!(s.parse::<ApiVersion>().is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn latest_orders_above_every_number() {
        assert!(ApiVersion::Latest > ApiVersion::Numbered(99));
        assert!(ApiVersion::Numbered(2) > ApiVersion::Numbered(1));
    }

    #[test]
    fn coverage_never_exceeds_the_request() {
        assert!(ApiVersion::Numbered(3).covers(1));
        assert!(ApiVersion::Numbered(3).covers(3));
        assert!(!ApiVersion::Numbered(3).covers(4));
        assert!(ApiVersion::Latest.covers(99));
    }

    #[test]
    fn display_round_trips() {
        for v in [ApiVersion::Numbered(1), ApiVersion::Numbered(17), ApiVersion::Latest] {
            assert_eq!(v.to_string().parse::<ApiVersion>(), Ok(v));
        }
    }
}
