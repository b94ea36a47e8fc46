//! Ports to the upstream catalog API.
//!
//! The infrastructure layer implements these traits over HTTP; the in-memory
//! [`MockCatalogGateway`] implements them for tests.

mod mock;
mod traits;

#[cfg(test)]
mod tests;

pub use mock::MockCatalogGateway;
pub use traits::{AuthGateway, CatalogGateway, ProductGateway, Reply, UserGateway};
