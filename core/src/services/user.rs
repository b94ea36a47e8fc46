//! User directory passthrough

use std::sync::Arc;

use crate::domain::entities::UserPage;
use crate::errors::DomainResult;
use crate::gateway::UserGateway;

pub struct UserService<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> UserService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// List users; every upstream failure is an internal error
    pub async fn list_users(&self) -> DomainResult<UserPage> {
        let page = self.gateway.list_users().await.map_err(|error| {
            tracing::error!(error = %error, "Failed to list users");
            error
        })?;
        tracing::debug!(count = page.users.len(), "Listed users");
        Ok(page)
    }
}
