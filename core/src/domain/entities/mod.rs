//! Domain entities representing upstream catalog objects.

pub mod product;
pub mod session;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use product::{NewProduct, Product, ProductPage};
pub use session::{Credentials, Session};
pub use user::{User, UserPage};
