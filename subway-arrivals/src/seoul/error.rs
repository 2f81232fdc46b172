//! Error types for the arrival client.

/// Errors from validating, fetching or decoding an arrival query.
#[derive(Debug, thiserror::Error)]
pub enum ArrivalError {
    /// A precondition was violated before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure or non-2xx HTTP status.
    #[error("network error: {message}")]
    Network {
        message: String,
        url: String,
        status: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Malformed payload or an error reported by the endpoint itself.
    #[error("{}", format_api_error(.code.as_deref(), .message))]
    Api {
        code: Option<String>,
        message: String,
    },
}

fn format_api_error(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("API error [{code}]: {message}"),
        None => format!("API error: {message}"),
    }
}

impl ArrivalError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ArrivalError::InvalidArgument(message.into())
    }

    pub(crate) fn api(message: impl Into<String>) -> Self {
        ArrivalError::Api {
            code: None,
            message: message.into(),
        }
    }

    /// Endpoint error code, if the endpoint reported one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ArrivalError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status, if the failure was a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArrivalError::Network { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether repeating the same request might succeed.
    ///
    /// Only transport failures qualify; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ArrivalError::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ArrivalError::invalid("station name must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument: station name must not be empty"
        );

        let err = ArrivalError::Api {
            code: Some("ERROR-337".into()),
            message: "no data".into(),
        };
        assert_eq!(err.to_string(), "API error [ERROR-337]: no data");

        let err = ArrivalError::api("malformed response");
        assert_eq!(err.to_string(), "API error: malformed response");

        let err = ArrivalError::Network {
            message: "HTTP request failed with status 503".into(),
            url: "http://localhost/x".into(),
            status: Some(503),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "network error: HTTP request failed with status 503"
        );
    }

    #[test]
    fn accessors() {
        let err = ArrivalError::Api {
            code: Some("INFO-200".into()),
            message: "none".into(),
        };
        assert_eq!(err.code(), Some("INFO-200"));
        assert_eq!(err.status(), None);
        assert!(!err.is_retryable());

        let err = ArrivalError::Network {
            message: "down".into(),
            url: String::new(),
            status: Some(500),
            source: None,
        };
        assert_eq!(err.code(), None);
        assert_eq!(err.status(), Some(500));
        assert!(err.is_retryable());

        assert!(!ArrivalError::invalid("x").is_retryable());
    }
}
