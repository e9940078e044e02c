use serde_json::{Value, json};
use utoipa::openapi::OpenApi;
use verso_domain::config::DocsConfig;
use verso_kernel::build_info::BuildInfo;
use verso_kernel::docs::{DocGroups, decorate};
use verso_kernel::routing::RouteTable;

fn fixture() -> OpenApi {
    serde_json::from_value(json!({
        "openapi": "3.1.0",
        "info": { "title": "placeholder", "version": "0" },
        "paths": {
            "/api/v1/person": { "get": { "operationId": "listPeopleV1", "responses": {} } },
            "/api/v1/person/{id}": { "get": { "operationId": "getPersonV1", "responses": {} } },
            "/api/v2/person": { "get": { "operationId": "listPeopleV2", "responses": {} } },
            "/api/v1/session": { "get": { "operationId": "listSessionsV1", "responses": {} } },
            "/health": { "get": { "operationId": "health", "responses": {} } }
        }
    }))
    .expect("fixture document")
}

fn build_record() -> BuildInfo {
    BuildInfo::new("verso-server", "1.2.3", Some("2024-06-01T12:30:00Z"))
}

fn decorated() -> Value {
    let mut doc = fixture();
    decorate(&mut doc, &DocsConfig::default(), &build_record());
    serde_json::to_value(&doc).expect("serializable document")
}

#[test]
fn info_section_carries_version_and_build_time() {
    let doc = decorated();
    assert_eq!(doc["info"]["title"], DocsConfig::default().title);
    assert_eq!(doc["info"]["version"], "1.2.3");
    let description = doc["info"]["description"].as_str().expect("description");
    assert!(description.contains("Build time (UTC): 2024-06-01T12:30:00Z"));
    assert_eq!(doc["externalDocs"]["url"], DocsConfig::default().repository_url);
}

#[test]
fn versioned_operations_document_caller_headers() {
    let doc = decorated();
    let params = doc["paths"]["/api/v1/person"]["get"]["parameters"]
        .as_array()
        .expect("injected parameters");
    assert_eq!(params[0]["name"], "X-Application-Id");
    assert_eq!(params[1]["name"], "X-User-Id");
    assert_eq!(params[0]["in"], "header");
    assert_eq!(params[0]["required"], true);

    // System endpoints are not versioned and stay untouched.
    assert!(doc["paths"]["/health"]["get"]["parameters"].is_null());
}

#[test]
fn session_operations_declare_the_bearer_requirement() {
    let doc = decorated();
    let security = doc["paths"]["/api/v1/session"]["get"]["security"]
        .as_array()
        .expect("security requirement");
    assert!(security.iter().any(|req| req.get("access-token").is_some()));
    assert!(doc["components"]["securitySchemes"]["access-token"].is_object());

    // Person operations carry no requirement.
    assert!(doc["paths"]["/api/v1/person"]["get"]["security"].is_null());
}

#[test]
fn groups_cover_every_version_plus_latest() {
    let doc = fixture();
    let table = RouteTable::from_openapi(&doc);
    let groups = DocGroups::build(&doc, &table);

    let names: Vec<_> = groups.summaries().into_iter().map(|s| s.group).collect();
    assert_eq!(names, ["api-latest", "api-v1", "api-v2"]);
    assert_eq!(
        groups.summaries()[0].url,
        "/api-docs/api-latest/openapi.json"
    );
}

#[test]
fn group_shows_the_effective_surface_of_its_version() {
    let doc = fixture();
    let table = RouteTable::from_openapi(&doc);
    let groups = DocGroups::build(&doc, &table);

    let v2 = serde_json::to_value(groups.get("api-v2").expect("api-v2 group")).expect("json");
    let paths = v2["paths"].as_object().expect("paths");

    // Own and inherited endpoints, all rewritten to the group's label.
    assert!(paths.contains_key("/api/v2/person"));
    assert!(paths.contains_key("/api/v2/person/{id}"));
    assert!(paths.contains_key("/api/v2/session"));
    // No leaked original keys, no system endpoints.
    assert!(!paths.contains_key("/api/v1/person"));
    assert!(!paths.contains_key("/health"));

    // The v2 registration wins over the inherited v1 one.
    assert_eq!(paths["/api/v2/person"]["get"]["operationId"], "listPeopleV2");
    assert_eq!(paths["/api/v2/person/{id}"]["get"]["operationId"], "getPersonV1");
}

#[test]
fn latest_group_tracks_the_newest_version() {
    let doc = fixture();
    let table = RouteTable::from_openapi(&doc);
    let groups = DocGroups::build(&doc, &table);

    let latest =
        serde_json::to_value(groups.get("api-latest").expect("api-latest group")).expect("json");
    let paths = latest["paths"].as_object().expect("paths");

    assert_eq!(paths["/api/latest/person"]["get"]["operationId"], "listPeopleV2");
    assert!(paths.contains_key("/api/latest/session"));
}

#[test]
fn empty_document_still_yields_a_valid_schema() {
    let mut doc: OpenApi = serde_json::from_value(json!({
        "openapi": "3.1.0",
        "info": { "title": "placeholder", "version": "0" },
        "paths": {}
    }))
    .expect("empty document");

    let table = RouteTable::from_openapi(&doc);
    assert!(table.is_empty());

    let groups = DocGroups::build(&doc, &table);
    assert!(groups.is_empty());
    assert!(groups.summaries().is_empty());

    decorate(&mut doc, &DocsConfig::default(), &build_record());
    let value = serde_json::to_value(&doc).expect("still serializable");
    assert_eq!(value["openapi"], "3.1.0");
}
