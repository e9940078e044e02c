use serde_json::json;
use verso_domain::config::{ApiConfig, DocsConfig, LogConfig, ServerConfig};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);
    assert!(server.ssl.is_none());

    let docs = DocsConfig::default();
    assert_eq!(docs.title, "Verso API versioning service");
    assert!(docs.repository_url.starts_with("https://"));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.directory.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 9090 },
        "docs": { "title": "t", "description": "d", "repository_url": "https://example.com" },
        "log": { "level": "debug", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.docs.title, "t");
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.json);
}

#[test]
fn partial_input_falls_back_to_defaults() {
    let cfg: ApiConfig =
        serde_json::from_value(json!({ "server": { "port": 1234 } })).expect("config deserialize");
    assert_eq!(cfg.server.port, 1234);
    assert_eq!(cfg.docs.title, DocsConfig::default().title);
}

#[test]
fn deref_mut_does_not_alias_clones() {
    let mut cfg = ApiConfig::default();
    let snapshot = cfg.clone();
    cfg.server.port = 1;
    assert_eq!(snapshot.server.port, 8080);
    assert_eq!(cfg.server.port, 1);
}
