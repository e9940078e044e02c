use super::pattern::{PathPattern, VersionedPath};
use std::collections::{BTreeMap, BTreeSet};
use utoipa::openapi::OpenApi;
use verso_domain::version::ApiVersion;

/// One documented route registered at a concrete version.
#[derive(Debug, Clone)]
struct VersionedRoute {
    scope: String,
    version: u8,
    tail: PathPattern,
}

/// A snapshot of every versioned route the service exposes.
///
/// Derived by introspecting the generated OpenAPI document, so whatever the
/// documentation knows about is exactly what version resolution can reach.
/// An empty table is valid: resolution then never matches and every versioned
/// request falls through to a plain 404.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<VersionedRoute>,
    versions: BTreeMap<String, BTreeSet<u8>>,
}

impl RouteTable {
    /// Collects every path of the shape `/{scope}/{version}/{tail}` from the document.
    #[must_use]
    pub fn from_openapi(doc: &OpenApi) -> Self {
        let mut table = Self::default();
        for path in doc.paths.paths.keys() {
            if let Some(v) = VersionedPath::split(path) {
                table.insert(v.scope, v.version, v.tail);
            }
        }
        table
    }

    fn insert(&mut self, scope: &str, version: u8, tail: &str) {
        self.routes.push(VersionedRoute {
            scope: scope.to_owned(),
            version,
            tail: PathPattern::parse(tail),
        });
        self.versions.entry(scope.to_owned()).or_default().insert(version);
    }

    /// Registered version numbers per scope, for documentation grouping.
    #[must_use]
    pub const fn versions_by_scope(&self) -> &BTreeMap<String, BTreeSet<u8>> {
        &self.versions
    }

    #[must_use]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.versions.contains_key(scope)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The newest registered version not exceeding `requested` whose tail matches.
    #[must_use]
    pub fn resolve(&self, scope: &str, requested: ApiVersion, tail: &[&str]) -> Option<u8> {
        self.routes
            .iter()
            .filter(|r| r.scope == scope && requested.covers(r.version) && r.tail.matches(tail))
            .map(|r| r.version)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_table() -> RouteTable {
        let mut table = RouteTable::default();
        for version in 1..=3 {
            table.insert("api", version, "person");
            table.insert("api", version, "person/{id}");
        }
        table.insert("api", 2, "person/1");
        table.insert("api", 1, "session");
        table.insert("api", 1, "session/{id}");
        table
    }

    #[test]
    fn exact_version_resolves_to_itself() {
        let table = demo_table();
        assert_eq!(table.resolve("api", ApiVersion::Numbered(2), &["person"]), Some(2));
    }

    #[test]
    fn newer_requests_fall_back_to_the_newest_registered() {
        let table = demo_table();
        assert_eq!(table.resolve("api", ApiVersion::Numbered(5), &["person", "42"]), Some(3));
        assert_eq!(table.resolve("api", ApiVersion::Numbered(7), &["session"]), Some(1));
    }

    #[test]
    fn latest_resolves_to_the_maximum() {
        let table = demo_table();
        assert_eq!(table.resolve("api", ApiVersion::Latest, &["person"]), Some(3));
        assert_eq!(table.resolve("api", ApiVersion::Latest, &["session", "abc"]), Some(1));
    }

    #[test]
    fn requests_below_the_oldest_version_do_not_resolve() {
        let table = demo_table();
        assert_eq!(table.resolve("api", ApiVersion::Numbered(0), &["person"]), None);
    }

    #[test]
    fn unknown_scope_and_unknown_tail_do_not_resolve() {
        let table = demo_table();
        assert_eq!(table.resolve("internal", ApiVersion::Latest, &["person"]), None);
        assert_eq!(table.resolve("api", ApiVersion::Latest, &["hotel"]), None);
        assert!(!table.has_scope("internal"));
        assert!(table.has_scope("api"));
    }

    #[test]
    fn empty_table_is_valid() {
        let table = RouteTable::default();
        assert!(table.is_empty());
        assert_eq!(table.resolve("api", ApiVersion::Latest, &["person"]), None);
        assert!(table.versions_by_scope().is_empty());
    }
}
