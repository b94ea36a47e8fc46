//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error label for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code mirrored into the body
    pub status: u16,

    /// Request path that produced the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Field-level problems, formatted as `field: message`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status,
            path: None,
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error labels used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const FORBIDDEN: &str = "Forbidden";
    pub const PRODUCT_NOT_FOUND: &str = "Product Not Found";
    pub const NOT_FOUND: &str = "Not Found";
    pub const VALIDATION_FAILED: &str = "Validation Failed";
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}
