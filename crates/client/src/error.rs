//! Error types for the Kibana client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Kibana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Kibana.
    ///
    /// `message` is the parsed platform error when the body matches
    /// Kibana's error envelope, the raw body otherwise; `body` always
    /// retains the raw response text for diagnostics.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        body: String,
    },

    /// Invalid response format from Kibana.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing credentials at build time.
    #[error("Authentication required: {0}")]
    AuthMissing(String),
}

impl ClientError {
    /// Check if this error is a saved-object conflict (HTTP 409).
    ///
    /// A conflict means an object already exists at the target identifier
    /// and the deployment does not treat POST-to-existing-ID as an upsert.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ApiError { status: 409, .. })
    }

    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// The raw response body, when this error carries one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_conflict() {
        let err = ClientError::ApiError {
            status: 409,
            url: "https://kibana.example.com".to_string(),
            message: "version conflict".to_string(),
            body: "{}".to_string(),
        };
        assert!(err.is_conflict());

        let err = ClientError::ApiError {
            status: 500,
            url: "https://kibana.example.com".to_string(),
            message: "boom".to_string(),
            body: String::new(),
        };
        assert!(!err.is_conflict());

        let err = ClientError::Timeout(Duration::from_secs(30));
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_error_is_timeout() {
        let err = ClientError::Timeout(Duration::from_secs(30));
        assert!(err.is_timeout());

        let err = ClientError::ConnectionRefused("https://kibana.example.com".to_string());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_response_body_present_only_for_api_errors() {
        let err = ClientError::ApiError {
            status: 409,
            url: "https://kibana.example.com".to_string(),
            message: "conflict".to_string(),
            body: r#"{"statusCode":409}"#.to_string(),
        };
        assert_eq!(err.response_body(), Some(r#"{"statusCode":409}"#));

        let err = ClientError::ApiError {
            status: 502,
            url: "https://kibana.example.com".to_string(),
            message: "bad gateway".to_string(),
            body: String::new(),
        };
        assert!(err.response_body().is_none());

        let err = ClientError::Timeout(Duration::from_secs(30));
        assert!(err.response_body().is_none());
    }
}
