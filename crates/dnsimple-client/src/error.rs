//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or unusable credentials, unreadable credentials file, or
    /// invalid local input
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server rejected the credentials (HTTP 401)
    #[error("Authentication failed")]
    Authentication,

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {message}")]
    NotFound {
        /// Error message from API
        message: String,
    },

    /// API returned any other non-success response
    #[error("API error ({status}): {message}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
        /// Parsed error body, when the server sent JSON
        body: Option<serde_json::Value>,
    },

    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a generic API response error
    pub fn request(status: u16, message: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self::Request {
            status,
            message: message.into(),
            body,
        }
    }

    /// Map a non-success status and its raw body to the matching error.
    ///
    /// 401 is always `Authentication`, whatever the body says.
    #[must_use]
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        if status == 401 {
            return Self::Authentication;
        }

        let body = serde_json::from_str::<serde_json::Value>(raw_body).ok();
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| raw_body.trim().to_string(), str::to_string);

        match status {
            404 => Self::not_found(message),
            _ => Self::request(status, message, body),
        }
    }

    /// HTTP status associated with this error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Request { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::Json(_) => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_ignores_body() {
        let err = ApiError::from_status(401, r#"{"message": "Everything is fine"}"#);
        assert!(matches!(err, ApiError::Authentication));

        let err = ApiError::from_status(401, "");
        assert!(matches!(err, ApiError::Authentication));
    }

    #[test]
    fn test_not_found_uses_message_key() {
        let err = ApiError::from_status(404, r#"{"message": "Record `99` not found"}"#);
        match err {
            ApiError::NotFound { message } => assert_eq!(message, "Record `99` not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_request_error_keeps_status_and_body() {
        let err = ApiError::from_status(
            400,
            r#"{"message": "Validation failed", "errors": {"name": ["is invalid"]}}"#,
        );
        assert_eq!(err.status(), Some(400));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        match err {
            ApiError::Request {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Validation failed");
                assert!(body.unwrap().get("errors").is_some());
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }

    #[test]
    fn test_request_error_with_plain_text_body() {
        let err = ApiError::from_status(502, "Bad Gateway\n");
        assert!(err.is_server_error());
        match err {
            ApiError::Request { message, body, .. } => {
                assert_eq!(message, "Bad Gateway");
                assert!(body.is_none());
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ApiError::config("A password or API token is required for all API requests.");
        assert_eq!(
            err.to_string(),
            "Configuration error: A password or API token is required for all API requests."
        );
        assert_eq!(err.status(), None);
    }
}
