use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<ProxyConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ProxyConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_base.as_str(), "https://rickandmortyapi.com/api");
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            request_secs: DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
        }
    );
    assert!(cfg.static_dir.is_none());
}

#[test]
fn parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("UPSTREAM_BASE_URL", "http://127.0.0.1:9000/api/"),
        ("UPSTREAM_CONNECT_TIMEOUT_SECS", "3"),
        ("UPSTREAM_REQUEST_TIMEOUT_SECS", "not-a-number"),
        ("STATIC_DIR", "client/dist"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_base.as_str(), "http://127.0.0.1:9000/api");
    assert_eq!(cfg.timeouts.connect_secs, 3);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.static_dir, Some(PathBuf::from("client/dist")));
}

#[test]
fn blank_static_dir_is_ignored() {
    let cfg = config_from(&[("STATIC_DIR", "  ")]).unwrap();
    assert!(cfg.static_dir.is_none());
}

#[test]
fn invalid_port_is_a_startup_error() {
    let err = config_from(&[("PORT", "http")]).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn upstream_base_must_be_http() {
    let err = parse_upstream_base("ftp://example.test/api").unwrap_err().to_string();
    assert!(err.contains("scheme must be http or https"));
    assert!(parse_upstream_base("mailto:rick@example.test").is_err());
    assert!(parse_upstream_base("not a url").is_err());
}
