//! Shared utilities and common types for the Catalog Gateway server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, Environment, LoggingConfig, ServerConfig, UpstreamConfig};
pub use errors::{error_codes, ErrorResponse};
