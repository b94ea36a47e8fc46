//! Errors reported by upstream gateway implementations

use thiserror::Error;

/// Failure of a single call to the upstream catalog API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The upstream answered with a non-success status
    #[error("Upstream responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout)
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape
    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        GatewayError::Status {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of the upstream response, if there was one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream `message`, or `default` when the body carries none
    pub fn message_or(&self, default: &str) -> String {
        match self {
            GatewayError::Status { body, .. } => extract_message(body, default),
            _ => default.to_string(),
        }
    }
}

/// Pull the `message` string out of an upstream JSON error body.
///
/// Bodies that are empty, not JSON, or lack a non-empty string `message`
/// yield `default`.
pub fn extract_message(body: &str, default: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| default.to_string())
}
