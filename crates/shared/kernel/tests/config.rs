use verso_domain::config::ApiConfig;
use verso_kernel::config::load_config;

#[test]
fn file_settings_override_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("server.toml"),
        r#"
[server]
port = 9191

[docs]
title = "From file"
"#,
    )
    .expect("write config file");

    let cfg: ApiConfig = load_config(Some(dir.path().join("server"))).expect("load config");
    assert_eq!(cfg.server.port, 9191);
    assert_eq!(cfg.docs.title, "From file");
    // Untouched sections keep their defaults.
    assert_eq!(cfg.log.level, "info");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent"))).expect("load config");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.server.ssl.is_none());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("server.toml"), "server = \"not a table\"")
        .expect("write config file");

    let result: Result<ApiConfig, _> = load_config(Some(dir.path().join("server")));
    assert!(result.is_err());
}
