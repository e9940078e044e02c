use crate::routing::pattern::VersionedPath;
use crate::routing::table::RouteTable;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::openapi::OpenApi;
use utoipa::openapi::path::PathItem;
use verso_domain::constants::API_DOCS_PATH;
use verso_domain::version::ApiVersion;

/// Per-version documentation groups, keyed by name (`api-v1`, .., `api-latest`).
#[derive(Clone, Default)]
pub struct DocGroups {
    groups: BTreeMap<String, OpenApi>,
}

/// One entry of the group listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group: String,
    pub url: String,
}

impl DocGroups {
    /// Builds one group per registered version of every scope, plus `latest`.
    ///
    /// With an empty table (no versioned routes) no groups exist; that is a
    /// valid state and the listing is simply empty.
    #[must_use]
    pub fn build(base: &OpenApi, table: &RouteTable) -> Self {
        let mut groups = BTreeMap::new();
        for (scope, versions) in table.versions_by_scope() {
            for &version in versions {
                let version = ApiVersion::Numbered(version);
                groups.insert(group_name(scope, version), group_doc(base, scope, version));
            }
            let latest = ApiVersion::Latest;
            groups.insert(group_name(scope, latest), group_doc(base, scope, latest));
        }
        Self { groups }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OpenApi> {
        self.groups.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OpenApi)> {
        self.groups.iter()
    }

    /// The group listing served at the documentation index.
    #[must_use]
    pub fn summaries(&self) -> Vec<GroupSummary> {
        self.groups
            .keys()
            .map(|name| GroupSummary {
                group: name.clone(),
                url: format!("{API_DOCS_PATH}/{name}/openapi.json"),
            })
            .collect()
    }
}

fn group_name(scope: &str, version: ApiVersion) -> String {
    format!("{scope}-{version}")
}

/// The effective API surface of `scope` at `version`.
///
/// Every path registered at that version or below is included, its key
/// rewritten to the group's version label. When several versions collapse onto
/// the same rewritten key, ascending iteration lets the newest overwrite the
/// inherited ones.
fn group_doc(base: &OpenApi, scope: &str, version: ApiVersion) -> OpenApi {
    let mut by_version: BTreeMap<u8, Vec<(String, PathItem)>> = BTreeMap::new();
    for (path, item) in &base.paths.paths {
        let Some(v) = VersionedPath::split(path) else {
            continue;
        };
        if v.scope == scope && version.covers(v.version) {
            let renamed = format!("/{scope}/{version}/{}", v.tail);
            by_version.entry(v.version).or_default().push((renamed, item.clone()));
        }
    }

    let mut paths = BTreeMap::new();
    for (_, entries) in by_version {
        for (path, item) in entries {
            paths.insert(path, item);
        }
    }

    let mut doc = base.clone();
    doc.paths.paths = paths;
    doc
}
