//! Error types for the grading-criteria client

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when the course id is empty or zero
pub const COURSE_ID_REQUIRED: &str = "Course ID is required";

/// Fallback message for transport failures that carry no message of their own
pub const FETCH_FAILED: &str = "Failed to fetch grading criteria";

/// Message used for every failure that is not a recognized transport failure
pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred while fetching grading criteria";

/// Errors returned by [`GradingClient`](crate::GradingClient) operations
///
/// Every variant displays as its message alone, so it can be shown to a user directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input rejected before any request was made
    #[error("{message}")]
    Validation { message: String },

    /// The HTTP layer failed (non-success status or no response at all)
    #[error("{message}")]
    Transport {
        message: String,
        /// Status code, when a response was received
        status: Option<StatusCode>,
    },

    /// Anything else
    #[error("{message}")]
    Unknown { message: String },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    /// Create an error for an unrecognized failure
    pub fn unknown(message: impl Into<String>) -> Self {
        ApiError::Unknown {
            message: message.into(),
        }
    }

    /// Wrap a recognized transport failure
    ///
    /// The transport's own message wins; `default_message` is used when it has none.
    pub fn from_transport(error: &TransportError, default_message: &str) -> Self {
        ApiError::Transport {
            message: error
                .message()
                .unwrap_or(default_message)
                .to_string(),
            status: error.status(),
        }
    }

    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation { message }
            | ApiError::Transport { message, .. }
            | ApiError::Unknown { message } => message,
        }
    }
}

/// Failures reported by an [`HttpTransport`](crate::HttpTransport)
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success status
    #[error("HTTP status {status}")]
    Status {
        status: StatusCode,
        /// Message supplied by the server in the response body
        message: Option<String>,
    },

    /// No response was received (connect, TLS, timeout)
    #[error("Network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// Failure the transport does not classify as an HTTP failure
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Whether this is a recognized transport-layer failure
    pub fn is_transport(&self) -> bool {
        !matches!(self, TransportError::Other(_))
    }

    /// Server-supplied message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            TransportError::Status { message, .. } => message.as_deref(),
            TransportError::Network(_) | TransportError::Other(_) => None,
        }
    }

    /// Status code of the failed response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status(),
            TransportError::Other(_) => None,
        }
    }
}

/// Errors while building a client
#[derive(Error, Debug)]
pub enum ClientInitError {
    /// No base URL configured
    #[error("Base URL is required")]
    MissingBaseUrl,

    /// Base URL could not be parsed or cannot carry a path
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Bearer token contains characters not allowed in a header
    #[error("Invalid bearer token format")]
    InvalidToken,

    /// The underlying HTTP client failed to build
    #[error("HTTP client initialization failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        assert_eq!(
            ApiError::validation(COURSE_ID_REQUIRED).to_string(),
            COURSE_ID_REQUIRED
        );
        assert_eq!(ApiError::unknown("boom").to_string(), "boom");
    }

    #[test]
    fn test_from_transport_prefers_server_message() {
        let err = TransportError::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("Not Found".to_string()),
        };
        let api = ApiError::from_transport(&err, FETCH_FAILED);
        assert_eq!(api.message(), "Not Found");
        assert_eq!(
            api,
            ApiError::Transport {
                message: "Not Found".to_string(),
                status: Some(StatusCode::NOT_FOUND),
            }
        );
    }

    #[test]
    fn test_from_transport_falls_back_to_default() {
        let err = TransportError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(
            ApiError::from_transport(&err, FETCH_FAILED).message(),
            FETCH_FAILED
        );
    }

    #[test]
    fn test_other_is_not_transport() {
        let err = TransportError::Other("disk on fire".into());
        assert!(!err.is_transport());
        assert_eq!(err.message(), None);
        assert_eq!(err.status(), None);

        let status = TransportError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert!(status.is_transport());
        assert_eq!(status.to_string(), "HTTP status 500 Internal Server Error");
    }
}
