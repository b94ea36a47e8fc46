//! Business services translating upstream outcomes into domain results.

mod auth;
mod product;
mod user;

// Re-export commonly used types
pub use auth::AuthService;
pub use product::ProductService;
pub use user::UserService;
