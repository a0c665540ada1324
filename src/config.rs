//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SUMMARY_UPSTREAM_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SUMMARY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SUMMARY_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `SUMMARY_UPSTREAM_URL` is not an http(s) URL.
    #[error("invalid SUMMARY_UPSTREAM_URL: {0}")]
    InvalidUpstreamUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for UpstreamTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_SUMMARY_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_SUMMARY_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the trip planner, without a trailing slash.
    pub upstream_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SUMMARY_UPSTREAM_URL`: default `http://127.0.0.1:5000`
    /// - `SUMMARY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUMMARY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `SUMMARY_UPSTREAM_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `SUMMARY_UPSTREAM_URL` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let upstream_url = parse_upstream_url(lookup("SUMMARY_UPSTREAM_URL").as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_u64_or(
                lookup("SUMMARY_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_SUMMARY_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64_or(
                lookup("SUMMARY_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_SUMMARY_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self { port, upstream_url, timeouts })
    }
}

fn parse_u64_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_upstream_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw
        .unwrap_or(DEFAULT_SUMMARY_UPSTREAM_URL)
        .trim()
        .trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstreamUrl(url.to_string()));
    }
    Ok(url.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
