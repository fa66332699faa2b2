use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(
        cfg,
        ServerConfig { port: DEFAULT_PORT, backend_url: None, proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS }
    );
}

#[test]
fn reads_all_values() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.com/api/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url.as_deref(), Some("https://api.example.com/api"));
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", " "), ("BACKEND_URL", "  "), ("PROXY_TIMEOUT_SECS", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
}

#[test]
fn invalid_port_is_rejected() {
    assert!(matches!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort(v)) if v == "http"));
    assert!(matches!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn invalid_timeout_is_rejected() {
    assert!(matches!(config_from(&[("PROXY_TIMEOUT_SECS", "-1")]), Err(ConfigError::InvalidTimeout(_))));
    assert!(matches!(config_from(&[("PROXY_TIMEOUT_SECS", "0")]), Err(ConfigError::InvalidTimeout(_))));
}

#[test]
fn backend_url_requires_http_scheme_and_host() {
    for bad in ["localhost:8000", "ftp://x", "http://", "not a url", "mailto:a@b.co"] {
        assert!(
            matches!(config_from(&[("BACKEND_URL", bad)]), Err(ConfigError::InvalidBackendUrl(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn error_messages_name_the_variable() {
    let err = config_from(&[("PORT", "abc")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: abc");
}

#[test]
fn backend_url_accepts_ports_and_paths() {
    let cfg = config_from(&[("BACKEND_URL", "http://127.0.0.1:8000/api//")]).unwrap();
    assert_eq!(cfg.backend_url.as_deref(), Some("http://127.0.0.1:8000/api"));
}
