//! In-memory catalog gateway for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{
    Credentials, NewProduct, Product, ProductPage, Session, User, UserPage,
};
use crate::errors::GatewayError;

use super::traits::{AuthGateway, ProductGateway, Reply, UserGateway};

/// Mock gateway answering the way the public catalog API does.
///
/// Unknown credentials get a 400, unknown tokens a 401, tokens registered
/// with [`with_forbidden_token`](Self::with_forbidden_token) a 403 and
/// missing products a 404, each with a JSON `message` body.
pub struct MockCatalogGateway {
    products: RwLock<Vec<Product>>,
    users: RwLock<Vec<User>>,
    accounts: HashMap<String, (String, Session)>,
    valid_tokens: HashSet<String>,
    forbidden_tokens: HashSet<String>,
    failure: Option<GatewayError>,
    create_status: u16,
    next_id: AtomicU64,
    calls: AtomicUsize,
}

impl MockCatalogGateway {
    /// Create an empty gateway
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            users: RwLock::new(Vec::new()),
            accounts: HashMap::new(),
            valid_tokens: HashSet::new(),
            forbidden_tokens: HashSet::new(),
            failure: None,
            create_status: 201,
            next_id: AtomicU64::new(1),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_product(mut self, product: Product) -> Self {
        let next = self.next_id.get_mut();
        *next = (*next).max(product.id + 1);
        self.products.get_mut().push(product);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.get_mut().push(user);
        self
    }

    /// Register an account; its session token is `token-<username>`
    pub fn with_account(mut self, username: &str, password: &str) -> Self {
        let token = format!("token-{}", username);
        let session = Session {
            id: self.accounts.len() as u64 + 1,
            username: username.to_string(),
            email: Some(format!("{}@example.com", username)),
            token: token.clone(),
            refresh_token: Some(format!("refresh-{}", username)),
            ..Session::default()
        };
        self.accounts
            .insert(username.to_string(), (password.to_string(), session));
        self.valid_tokens.insert(token);
        self
    }

    pub fn with_forbidden_token(mut self, token: &str) -> Self {
        self.forbidden_tokens.insert(token.to_string());
        self
    }

    /// Make every call fail with `error`
    pub fn failing_with(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Status reported for successful creates (201 by default)
    pub fn with_create_status(mut self, status: u16) -> Self {
        self.create_status = status;
        self
    }

    /// Number of gateway calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn product_page(&self) -> ProductPage {
        let products = self.products.read().await.clone();
        let total = products.len() as u64;
        ProductPage {
            products,
            total,
            skip: 0,
            limit: total,
        }
    }

    fn rejection(status: u16, message: &str) -> GatewayError {
        GatewayError::status(status, serde_json::json!({ "message": message }).to_string())
    }
}

impl Default for MockCatalogGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for MockCatalogGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError> {
        self.enter()?;
        match self.accounts.get(&credentials.username) {
            Some((password, session)) if *password == credentials.password => Ok(session.clone()),
            _ => Err(Self::rejection(400, "Invalid credentials")),
        }
    }
}

#[async_trait]
impl ProductGateway for MockCatalogGateway {
    async fn list_products(&self) -> Result<ProductPage, GatewayError> {
        self.enter()?;
        Ok(self.product_page().await)
    }

    async fn list_authorized_products(&self, token: &str) -> Result<ProductPage, GatewayError> {
        self.enter()?;
        if self.forbidden_tokens.contains(token) {
            return Err(Self::rejection(403, "Authentication Problem"));
        }
        if !self.valid_tokens.contains(token) {
            return Err(Self::rejection(401, "Invalid/Expired Token!"));
        }
        Ok(self.product_page().await)
    }

    async fn get_product(&self, id: i64) -> Result<Product, GatewayError> {
        self.enter()?;
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| i64::try_from(p.id).ok() == Some(id))
            .cloned()
            .ok_or_else(|| Self::rejection(404, &format!("Product with id '{}' not found", id)))
    }

    async fn add_product(&self, product: &NewProduct) -> Result<Reply<Product>, GatewayError> {
        self.enter()?;
        if product.title.trim().is_empty() {
            return Err(Self::rejection(400, "Title is required"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = product.clone().into_product(id);
        self.products.write().await.push(created.clone());
        Ok(Reply::new(self.create_status, created))
    }
}

#[async_trait]
impl UserGateway for MockCatalogGateway {
    async fn list_users(&self) -> Result<UserPage, GatewayError> {
        self.enter()?;
        let users = self.users.read().await.clone();
        let total = users.len() as u64;
        Ok(UserPage {
            users,
            total,
            skip: 0,
            limit: total,
        })
    }
}
