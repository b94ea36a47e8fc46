//! reqwest-backed implementation of the catalog gateway traits

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use cg_core::domain::entities::{
    Credentials, NewProduct, Product, ProductPage, Session, UserPage,
};
use cg_core::errors::GatewayError;
use cg_core::gateway::{AuthGateway, ProductGateway, Reply, UserGateway};
use cg_shared::config::UpstreamConfig;

use crate::InfrastructureError;

const JSON: &str = "application/json";

/// Client for the upstream catalog API.
///
/// Holds one connection pool; clone the surrounding `Arc` rather than the
/// client when sharing between workers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build a client with the configured timeout
    pub fn new(config: UpstreamConfig) -> Result<Self, InfrastructureError> {
        if config.base_url.is_empty() {
            return Err(InfrastructureError::Config(
                "upstream base URL must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("catalog-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Send a request and turn every non-2xx answer into `GatewayError::Status`
    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Upstream request failed");
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Upstream responded");

        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body still leaves the status to report.
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::status(status.as_u16(), body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.send(self.client.get(self.config.url(path))).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl AuthGateway for UpstreamClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError> {
        let request = self
            .client
            .post(self.config.url("/auth/login"))
            .json(credentials);
        let response = self.send(request).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ProductGateway for UpstreamClient {
    async fn list_products(&self) -> Result<ProductPage, GatewayError> {
        self.get_json("/products").await
    }

    async fn list_authorized_products(&self, token: &str) -> Result<ProductPage, GatewayError> {
        let request = self
            .client
            .get(self.config.url("/auth/products"))
            .header(AUTHORIZATION, format!("Bearer {}", token));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, GatewayError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    async fn add_product(&self, product: &NewProduct) -> Result<Reply<Product>, GatewayError> {
        let request = self
            .client
            .post(self.config.url("/products/add"))
            .json(product);
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body = Self::decode(response).await?;
        Ok(Reply::new(status, body))
    }
}

#[async_trait]
impl UserGateway for UpstreamClient {
    async fn list_users(&self) -> Result<UserPage, GatewayError> {
        self.get_json("/users").await
    }
}
