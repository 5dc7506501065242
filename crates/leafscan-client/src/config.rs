//! Client configuration.

use std::time::Duration;

use leafscan_models::Endpoint;
use url::Url;

use crate::error::{ClientResult, InferenceError};

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the server base URL.
pub const SERVER_URL_ENV: &str = "LEAFSCAN_SERVER_URL";

/// Configuration for the inference client.
///
/// There is no default server address; callers must supply one.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the inference server, e.g. `http://10.0.0.5:5000`
    pub base_url: Url,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// Timeout for each read of the response
    pub read_timeout: Duration,
    /// Budget for uploading the request body
    pub write_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given server with default timeouts.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
        })
    }

    /// Create config from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var(SERVER_URL_ENV).map_err(|_| {
            InferenceError::invalid_config(format!("{} is not set", SERVER_URL_ENV))
        })?;

        Ok(Self::new(&base_url)?.with_env_timeouts())
    }

    /// Override timeouts from `LEAFSCAN_*_TIMEOUT_SECS`, keeping defaults for
    /// unset or unparsable values.
    pub fn with_env_timeouts(mut self) -> Self {
        self.connect_timeout = env_secs("LEAFSCAN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS);
        self.read_timeout = env_secs("LEAFSCAN_READ_TIMEOUT_SECS", DEFAULT_READ_TIMEOUT_SECS);
        self.write_timeout = env_secs("LEAFSCAN_WRITE_TIMEOUT_SECS", DEFAULT_WRITE_TIMEOUT_SECS);
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration, write: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self.write_timeout = write;
        self
    }

    /// Whole-request deadline. reqwest has no write-phase timeout, so the
    /// write budget is folded into an overall bound.
    pub fn total_timeout(&self) -> Duration {
        self.connect_timeout + self.write_timeout + self.read_timeout
    }

    /// Full URL of a server route.
    pub fn route_url(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| InferenceError::invalid_config(format!("bad route {}: {}", path, e)))
    }

    /// Full URL of an inference endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> ClientResult<Url> {
        self.route_url(endpoint.path())
    }
}

/// Parse a base URL, making sure relative joins append to its path.
fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| InferenceError::invalid_config(format!("invalid server URL {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InferenceError::invalid_config(format!(
            "unsupported URL scheme {:?}",
            other
        ))),
    }
}

fn env_secs(key: &str, default: u64) -> Duration {
    Duration::from_secs(
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default),
    )
}
