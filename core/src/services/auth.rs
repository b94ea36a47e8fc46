//! Login against the upstream identity endpoint

use std::sync::Arc;

use crate::domain::entities::{Credentials, Session};
use crate::errors::{DomainError, DomainResult};
use crate::gateway::AuthGateway;

const DEFAULT_LOGIN_FAILURE: &str = "Invalid credentials";

/// Authentication service forwarding credentials upstream
pub struct AuthService<G: AuthGateway> {
    gateway: Arc<G>,
}

impl<G: AuthGateway> AuthService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Authenticate a user and return the upstream session.
    ///
    /// Any 4xx answer means the credentials were rejected and becomes
    /// `DomainError::Unauthorized` carrying the upstream message. Server
    /// errors and transport failures pass through as `DomainError::Upstream`.
    pub async fn authenticate(&self, credentials: &Credentials) -> DomainResult<Session> {
        tracing::debug!(username = %credentials.username, "Forwarding login");

        match self.gateway.login(credentials).await {
            Ok(session) => {
                tracing::info!(username = %session.username, "Login succeeded");
                Ok(session)
            }
            Err(error) => match error.status_code() {
                Some(status) if (400..500).contains(&status) => {
                    tracing::warn!(
                        username = %credentials.username,
                        status,
                        "Login rejected upstream"
                    );
                    Err(DomainError::Unauthorized(
                        error.message_or(DEFAULT_LOGIN_FAILURE),
                    ))
                }
                _ => {
                    tracing::error!(error = %error, "Login failed");
                    Err(error.into())
                }
            },
        }
    }
}
