//! Login credentials and the authenticated session returned for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username and password forwarded to the upstream login endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// The password must never reach a log line.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[PROTECTED]")
            .finish()
    }
}

/// Authenticated user profile plus the tokens issued by the upstream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SessionBody")]
pub struct Session {
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

/// Login body as sent upstream; newer versions name the token `accessToken`,
/// older ones `token`, and some send both.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SessionBody {
    id: u64,
    username: String,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    gender: Option<String>,
    image: Option<String>,
    access_token: Option<String>,
    token: Option<String>,
    refresh_token: Option<String>,
}

impl From<SessionBody> for Session {
    fn from(body: SessionBody) -> Self {
        Self {
            id: body.id,
            username: body.username,
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            gender: body.gender,
            image: body.image,
            token: body.access_token.or(body.token).unwrap_or_default(),
            refresh_token: body.refresh_token,
        }
    }
}
