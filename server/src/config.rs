//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    /// `BACKEND_URL` must be an absolute http(s) URL.
    #[error("invalid BACKEND_URL: {0}")]
    InvalidBackendUrl(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream REST API that `/api/*` forwards to, without a trailing `/`.
    pub backend_url: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: `/api/*` answers 404 when unset
    /// - `PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(lookup("PORT"), DEFAULT_PORT).map_err(ConfigError::InvalidPort)?;
        let proxy_timeout_secs = parse_or(lookup("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)
            .map_err(ConfigError::InvalidTimeout)?;
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("must be greater than zero".into()));
        }
        let backend_url = parse_backend_url(lookup("BACKEND_URL"))?;
        Ok(Self { port, backend_url, proxy_timeout_secs })
    }
}

/// Parse a trimmed value, treating unset or blank as `default`.
fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> Result<T, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| value.to_string()),
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        return Ok(None);
    }
    let valid = reqwest::Url::parse(url)
        .is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some_and(|h| !h.is_empty()));
    if !valid {
        return Err(ConfigError::InvalidBackendUrl(raw));
    }
    Ok(Some(url.to_string()))
}
