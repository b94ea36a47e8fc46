//! Product operations and their upstream status mapping

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPage};
use crate::errors::{DomainError, DomainResult, GatewayError};
use crate::gateway::ProductGateway;

const DEFAULT_TOKEN_REJECTED: &str = "Invalid/Expired Token!";
const DEFAULT_ACCESS_DENIED: &str = "Authentication Problem";
const DEFAULT_INVALID_PRODUCT: &str = "Invalid product data";

/// Status the upstream answers a successful create with
const CREATED: u16 = 201;

/// Product service proxying the upstream catalog
pub struct ProductService<G: ProductGateway> {
    gateway: Arc<G>,
}

impl<G: ProductGateway> ProductService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Public product listing
    pub async fn list_products(&self) -> DomainResult<ProductPage> {
        let page = self
            .gateway
            .list_products()
            .await
            .map_err(|error| Self::unexpected("list products", error))?;
        tracing::debug!(count = page.products.len(), total = page.total, "Listed products");
        Ok(page)
    }

    /// Product listing on behalf of a bearer token.
    ///
    /// An upstream 401 becomes `Unauthorized` and a 403 becomes `Forbidden`,
    /// both keeping the upstream message.
    pub async fn list_authorized_products(&self, token: &str) -> DomainResult<ProductPage> {
        match self.gateway.list_authorized_products(token).await {
            Ok(page) => Ok(page),
            Err(error) => match error.status_code() {
                Some(401) => {
                    tracing::warn!("Upstream rejected bearer token");
                    Err(DomainError::Unauthorized(
                        error.message_or(DEFAULT_TOKEN_REJECTED),
                    ))
                }
                Some(403) => {
                    tracing::warn!("Upstream refused access for bearer token");
                    Err(DomainError::Forbidden(error.message_or(DEFAULT_ACCESS_DENIED)))
                }
                _ => Err(Self::unexpected("list authorized products", error)),
            },
        }
    }

    /// Single product by id; an upstream 404 becomes `ProductNotFound`
    pub async fn get_product(&self, id: i64) -> DomainResult<Product> {
        match self.gateway.get_product(id).await {
            Ok(product) => Ok(product),
            Err(error) if error.status_code() == Some(404) => {
                tracing::debug!(id, "Product not found upstream");
                Err(DomainError::ProductNotFound { id })
            }
            Err(error) => Err(Self::unexpected("get product", error)),
        }
    }

    /// Create a product upstream.
    ///
    /// Only a 201 counts as created. An upstream 400 is reported as a
    /// validation failure carrying the upstream message.
    pub async fn create_product(&self, product: NewProduct) -> DomainResult<Product> {
        tracing::info!(title = %product.title, "Creating product");

        let reply = match self.gateway.add_product(&product).await {
            Ok(reply) => reply,
            Err(error) if error.status_code() == Some(400) => {
                let message = error.message_or(DEFAULT_INVALID_PRODUCT);
                tracing::warn!(message = %message, "Upstream rejected product");
                return Err(DomainError::validation(format!(
                    "{}: {}",
                    DEFAULT_INVALID_PRODUCT, message
                )));
            }
            Err(error) => return Err(Self::unexpected("create product", error)),
        };

        if reply.status != CREATED {
            tracing::error!(status = reply.status, "Unexpected create status");
            return Err(DomainError::Internal {
                message: format!("Failed to create product (status: {})", reply.status),
            });
        }

        tracing::info!(id = reply.body.id, "Product created");
        Ok(reply.body)
    }

    fn unexpected(operation: &str, error: GatewayError) -> DomainError {
        tracing::error!(error = %error, "Failed to {}", operation);
        error.into()
    }
}
