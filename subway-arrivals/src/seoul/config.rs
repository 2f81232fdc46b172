//! Client configuration.

use std::fmt;
use std::time::Duration;

use super::error::ArrivalError;

/// Default base URL for the Seoul real-time subway API.
pub const DEFAULT_BASE_URL: &str = "http://swopenAPI.seoul.go.kr/api/subway";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the arrival client.
///
/// Checked once by [`ApiConfig::validate`] when a client is built and
/// never changed afterwards.
#[derive(Clone)]
pub struct ApiConfig {
    /// API key issued by data.seoul.go.kr
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Time allowed to establish the connection
    pub connect_timeout: Duration,
    /// Time allowed for the whole response once connected
    pub read_timeout: Duration,
}

impl ApiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Check the credential and timeouts.
    pub fn validate(&self) -> Result<(), ArrivalError> {
        if self.api_key.trim().is_empty() {
            return Err(ArrivalError::invalid(
                "API key is required (obtain one from https://data.seoul.go.kr)",
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ArrivalError::invalid("base URL must not be empty"));
        }
        if self.connect_timeout.is_zero() {
            return Err(ArrivalError::invalid("connect timeout must be positive"));
        }
        if self.read_timeout.is_zero() {
            return Err(ArrivalError::invalid("read timeout must be positive"));
        }
        Ok(())
    }

    /// The API key with everything but the last 4 characters hidden.
    pub fn masked_api_key(&self) -> String {
        mask(&self.api_key)
    }
}

pub(crate) fn mask(secret: &str) -> String {
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("***{tail}")
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
