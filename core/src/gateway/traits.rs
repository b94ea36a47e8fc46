//! Gateway traits for the upstream authentication, product and user endpoints.

use async_trait::async_trait;

use crate::domain::entities::{Credentials, NewProduct, Product, ProductPage, Session, UserPage};
use crate::errors::GatewayError;

/// A successful upstream response together with its status code.
///
/// Only used where the exact 2xx status matters to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: u16,
    pub body: T,
}

impl<T> Reply<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self { status, body }
    }
}

/// Upstream login endpoint
///
/// Implementations return `GatewayError::Status` for every non-2xx answer
/// and leave its interpretation to the service layer.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError>;
}

/// Upstream product endpoints
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Public product listing
    async fn list_products(&self) -> Result<ProductPage, GatewayError>;

    /// Product listing that requires a bearer token
    ///
    /// The token is forwarded verbatim as `Authorization: Bearer <token>`.
    async fn list_authorized_products(&self, token: &str) -> Result<ProductPage, GatewayError>;

    /// Single product by id
    async fn get_product(&self, id: i64) -> Result<Product, GatewayError>;

    /// Create a product; the reply keeps the 2xx status the upstream chose
    async fn add_product(&self, product: &NewProduct) -> Result<Reply<Product>, GatewayError>;
}

/// Upstream user directory
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn list_users(&self) -> Result<UserPage, GatewayError>;
}

/// Everything the HTTP layer needs from a single upstream
pub trait CatalogGateway: AuthGateway + ProductGateway + UserGateway + 'static {}

impl<T> CatalogGateway for T where T: AuthGateway + ProductGateway + UserGateway + 'static {}
