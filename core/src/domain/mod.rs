//! Domain layer containing the catalog entities as the upstream API models them.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
