//! Path templates as they appear in the generated OpenAPI document.

use verso_domain::version::ApiVersion;

/// One segment of a route template tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// A `{name}` capture; matches exactly one non-empty segment.
    Param,
}

/// A parsed route tail (everything after the version segment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    #[must_use]
    pub fn parse(tail: &str) -> Self {
        let segments = tail
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('{') && s.ends_with('}') {
                    Segment::Param
                } else {
                    Segment::Literal(s.to_owned())
                }
            })
            .collect();
        Self { segments }
    }

    /// Whether the pattern matches a request tail, segment for segment.
    #[must_use]
    pub fn matches(&self, tail: &[&str]) -> bool {
        self.segments.len() == tail.len()
            && self.segments.iter().zip(tail).all(|(segment, part)| match segment {
                Segment::Param => !part.is_empty(),
                Segment::Literal(lit) => lit == part,
            })
    }
}

/// A documented path split into scope, concrete version and tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedPath<'a> {
    pub scope: &'a str,
    pub version: u8,
    pub tail: &'a str,
}

impl<'a> VersionedPath<'a> {
    /// Splits `/{scope}/{version}/{tail...}`.
    ///
    /// Returns `None` for unversioned paths and for `latest`: documented
    /// templates always carry a concrete version.
    #[must_use]
    pub fn split(path: &'a str) -> Option<Self> {
        let mut parts = path.trim_start_matches('/').splitn(3, '/');
        let scope = parts.next().filter(|s| !s.is_empty())?;
        let version = parts.next()?.parse::<ApiVersion>().ok()?.number()?;
        let tail = parts.next().unwrap_or_default();
        Some(Self { scope, version, tail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns_match_exactly() {
        let pattern = PathPattern::parse("person");
        assert!(pattern.matches(&["person"]));
        assert!(!pattern.matches(&["session"]));
        assert!(!pattern.matches(&["person", "42"]));
    }

    #[test]
    fn params_match_any_non_empty_segment() {
        let pattern = PathPattern::parse("person/{id}");
        assert!(pattern.matches(&["person", "42"]));
        assert!(pattern.matches(&["person", "abc"]));
        assert!(!pattern.matches(&["person"]));
    }

    #[test]
    fn splits_versioned_templates() {
        let v = VersionedPath::split("/api/v2/person/{id}").expect("versioned");
        assert_eq!(v.scope, "api");
        assert_eq!(v.version, 2);
        assert_eq!(v.tail, "person/{id}");
    }

    #[test]
    fn rejects_unversioned_and_latest_templates() {
        assert!(VersionedPath::split("/health").is_none());
        assert!(VersionedPath::split("/api/latest/person").is_none());
        assert!(VersionedPath::split("/api/version2/person").is_none());
        assert!(VersionedPath::split("/").is_none());
    }
}
