//! Domain-specific error types and error handling.

mod types;


// Re-export all error types and utilities
pub use types::{extract_message, GatewayError};

use thiserror::Error;

/// Core domain errors, each mapping to one HTTP outcome at the API edge
#[derive(Error, Debug)]
pub enum DomainError {
    /// Credentials or bearer token rejected
    #[error("{0}")]
    Unauthorized(String),

    /// Token accepted but access refused
    #[error("{0}")]
    Forbidden(String),

    #[error("Product not found with id: {id}")]
    ProductNotFound { id: i64 },

    /// Input rejected locally or by the upstream
    #[error("{message}")]
    Validation { message: String, details: Vec<String> },

    /// Upstream answered successfully but not in the expected way
    #[error("{message}")]
    Internal { message: String },

    /// Any upstream failure without a more specific meaning
    #[error(transparent)]
    Upstream(#[from] GatewayError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
