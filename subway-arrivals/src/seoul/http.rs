//! Blocking HTTP transport.

use tracing::{debug, error};

use super::config::ApiConfig;
use super::error::ArrivalError;

/// Performs one GET and returns the response body.
///
/// Implementations must not retry or cache, and must report every
/// failure below the JSON layer as [`ArrivalError::Network`].
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, ArrivalError>;
}

/// [`Transport`] backed by a blocking reqwest client.
///
/// Holds no per-request state, so one instance can serve calls from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the config's connect and read timeouts.
    pub fn new(config: &ApiConfig) -> Result<Self, ArrivalError> {
        config.validate()?;

        let http = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()
            .map_err(|e| network_error("failed to build HTTP client", "", e))?;

        debug!(
            connect_timeout_ms = config.connect_timeout.as_millis() as u64,
            read_timeout_ms = config.read_timeout.as_millis() as u64,
            "HTTP transport initialized"
        );

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, ArrivalError> {
        if url.trim().is_empty() {
            return Err(ArrivalError::invalid("URL must not be empty"));
        }

        let response = self.http.get(url).send().map_err(|e| {
            let message = if e.is_builder() {
                "invalid URL"
            } else if e.is_timeout() {
                "request timed out"
            } else if e.is_connect() {
                "connection failed"
            } else {
                "request failed"
            };
            let err = network_error(message, url, e);
            error!(error = %err, "{message}");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "HTTP request failed");
            return Err(ArrivalError::Network {
                message: format!("HTTP request failed with status {}", status.as_u16()),
                url: url.to_string(),
                status: Some(status.as_u16()),
                source: None,
            });
        }

        let body = response.text().map_err(|e| {
            let err = network_error("failed to read response body", url, e);
            error!(error = %err, "failed to read response body");
            err
        })?;

        debug!(
            status = status.as_u16(),
            content_length = body.len(),
            "received response"
        );

        Ok(body)
    }
}

// reqwest embeds the URL (and so the API key) in its errors; strip it.
fn network_error(message: &str, url: &str, source: reqwest::Error) -> ArrivalError {
    let source = source.without_url();
    ArrivalError::Network {
        message: format!("{message}: {source}"),
        url: url.to_string(),
        status: None,
        source: Some(source),
    }
}
