/*
[INPUT]:  Error sources (HTTP transport, remote API responses, serialization)
[OUTPUT]: Structured error types shared by the Todoist and Slack clients
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for taskbrief adapters
#[derive(Error, Debug)]
pub enum AdapterError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote returned a non-success HTTP status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Slack Web API returned ok=false
    #[error("Slack API error: {error}")]
    Api { error: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl AdapterError {
    /// Create a status error from a response status and body text
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        AdapterError::Status {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// Create a Slack API error from the envelope `error` field
    pub fn api_error(error: impl Into<String>) -> Self {
        AdapterError::Api {
            error: error.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_creation() {
        let err = AdapterError::status_error(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            AdapterError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            _ => panic!("Expected Status error variant"),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = AdapterError::api_error("channel_not_found");
        assert_eq!(err.to_string(), "Slack API error: channel_not_found");
    }
}
