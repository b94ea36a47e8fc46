use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use cg_core::domain::entities::{Credentials, Session};

use super::common::not_blank;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Upstream account name, 3 to 50 characters
    #[validate(
        required(message = "Username is required"),
        custom(function = "not_blank", message = "Username is required"),
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Password is required"),
        custom(function = "not_blank", message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Credentials to forward upstream; call after validation
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[PROTECTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: u64,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub token: String,
    pub refresh_token: Option<String>,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            username: session.username,
            email: session.email,
            first_name: session.first_name,
            last_name: session.last_name,
            gender: session.gender,
            image: session.image,
            token: session.token,
            refresh_token: session.refresh_token,
        }
    }
}
