//! # Infrastructure Layer
//!
//! Concrete implementations of the core gateway traits. The only external
//! system is the upstream catalog API, reached over HTTP with `reqwest`.

// Re-export core types for convenience
pub use cg_core::errors::*;

/// Upstream catalog API client
pub mod upstream;

pub use upstream::UpstreamClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
