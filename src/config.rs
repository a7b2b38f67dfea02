//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("FIXITY_BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendUrl(String),
    #[error("http client build failed: {0}")]
    HttpClient(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub timeouts: ProxyTimeouts,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FIXITY_BACKEND_URL`: default `http://localhost:8000`
    /// - `FIXITY_PROXY_TIMEOUT_SECS`: default 30
    /// - `FIXITY_PROXY_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", read("PORT"), DEFAULT_PORT)?;

        let backend_url = read("FIXITY_BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::BackendUrl(backend_url));
        }

        let timeouts = ProxyTimeouts {
            request_secs: parse_or("FIXITY_PROXY_TIMEOUT_SECS", read("FIXITY_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "FIXITY_PROXY_CONNECT_TIMEOUT_SECS",
                read("FIXITY_PROXY_CONNECT_TIMEOUT_SECS"),
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, backend_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
