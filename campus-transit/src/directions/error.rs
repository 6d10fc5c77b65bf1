//! Directions client error types.

use std::fmt;
use std::time::Duration;

/// Errors from a directions request.
///
/// Every variant is local to one request: the adapter logs it and carries
/// on with the other modes.
#[derive(Debug)]
pub enum DirectionsError {
    /// HTTP request failed (network error, client-side timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider answered with an error HTTP status
    Api { status: u16, message: String },

    /// Provider answered 200 with a non-OK status field
    Status {
        status: String,
        message: Option<String>,
    },

    /// Rate limited by the provider
    RateLimited,

    /// No answer within the per-mode time budget
    Timeout(Duration),

    /// Feature not configured or not available
    NotConfigured(String),
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(e) => write!(f, "HTTP error: {e}"),
            DirectionsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DirectionsError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DirectionsError::Status { status, message } => {
                write!(f, "directions status {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            DirectionsError::RateLimited => write!(f, "rate limited by directions provider"),
            DirectionsError::Timeout(after) => {
                write!(f, "directions request timed out after {after:?}")
            }
            DirectionsError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectionsError::Status {
            status: "ZERO_RESULTS".into(),
            message: None,
        };
        assert_eq!(err.to_string(), "directions status ZERO_RESULTS");

        let err = DirectionsError::Status {
            status: "REQUEST_DENIED".into(),
            message: Some("The provided API key is invalid.".into()),
        };
        assert_eq!(
            err.to_string(),
            "directions status REQUEST_DENIED: The provided API key is invalid."
        );

        let err = DirectionsError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DirectionsError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = DirectionsError::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "directions request timed out after 5s");
    }
}
