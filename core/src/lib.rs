//! # Catalog Gateway Core
//!
//! Domain layer for the Catalog Gateway backend.
//! This crate contains the catalog entities, the gateway traits the upstream
//! client implements, the services that translate upstream failures into
//! domain errors, and the error types themselves.

pub mod domain;
pub mod errors;
pub mod gateway;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use gateway::*;
pub use services::*;
