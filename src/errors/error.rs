//! Error types for the Draftsmith API client.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Result type alias for Draftsmith operations
pub type DraftsmithResult<T> = Result<T, DraftsmithError>;

/// A single validation failure within a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDetail {
    /// The request field that failed validation
    pub field: String,
    /// Why the field was rejected
    pub reason: String,
}

impl ValidationDetail {
    /// Create a validation detail for a field
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for the Draftsmith API client.
///
/// This enum covers all possible error scenarios with rich context for debugging
/// and proper retry handling. Note that reply-stream decode ambiguity is never
/// represented here: malformed frames are absorbed as literal text inside the
/// decoder, and only transport-level failures reach the caller.
#[derive(Error, Debug, Clone)]
pub enum DraftsmithError {
    /// Configuration error (invalid settings, missing required fields)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Authentication error (invalid API key, missing credentials)
    #[error("Authentication error: {message}")]
    Authentication {
        /// Error message describing the authentication issue
        message: String,
    },

    /// Validation error (invalid request parameters, constraints violated)
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue
        message: String,
        /// List of specific validation failures
        details: Vec<ValidationDetail>,
    },

    /// Rate limit error (too many requests, quota exceeded)
    #[error("Rate limit error: {message}")]
    RateLimit {
        /// Error message describing the rate limit issue
        message: String,
        /// Duration to wait before retrying (if provided by API)
        retry_after: Option<Duration>,
    },

    /// Network error (connection failed, timeout, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Server error (5xx responses from the Draftsmith API)
    #[error("Server error: {message}")]
    Server {
        /// Error message from the server
        message: String,
        /// HTTP status code
        status_code: Option<u16>,
    },

    /// Resource not found error
    #[error("Not found: {resource_type} {message}")]
    NotFound {
        /// Error message
        message: String,
        /// Type of resource that was not found
        resource_type: String,
    },

    /// Streaming error (transport interruption mid-stream)
    #[error("Stream error: {message}")]
    Stream {
        /// Error message describing the stream issue
        message: String,
    },

    /// The stream was cancelled via its cancel handle
    #[error("Stream cancelled")]
    Cancelled,

    /// Internal error (unexpected conditions, library bugs)
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

impl DraftsmithError {
    /// Returns true if this error is retryable with exponential backoff.
    ///
    /// Retryable errors include:
    /// - Rate limit errors (429)
    /// - Network errors (connection issues, timeouts)
    /// - Server errors (500, 502, 503)
    ///
    /// Streaming and cancellation errors are never retryable: the decoder
    /// performs no automatic retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DraftsmithError::RateLimit { .. }
                | DraftsmithError::Network { .. }
                | DraftsmithError::Server {
                    status_code: Some(500) | Some(502) | Some(503),
                    ..
                }
        )
    }

    /// Returns the retry-after duration if available.
    ///
    /// This is typically set in rate limit errors when the API provides
    /// a Retry-After header.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            DraftsmithError::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

// Conversions from common error types
impl From<reqwest::Error> for DraftsmithError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DraftsmithError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            DraftsmithError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            DraftsmithError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for DraftsmithError {
    fn from(err: serde_json::Error) -> Self {
        DraftsmithError::Internal {
            message: format!("JSON serialization/deserialization error: {}", err),
        }
    }
}

impl From<url::ParseError> for DraftsmithError {
    fn from(err: url::ParseError) -> Self {
        DraftsmithError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
