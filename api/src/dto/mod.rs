//! Request and response bodies of the public API.

pub mod auth;
pub mod common;
pub mod error;
pub mod product;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use common::{HealthResponse, TestResponse};
pub use error::{ErrorResponse, ErrorResponseExt};
pub use product::{ProductCreateRequest, ProductDto, ProductsResponse};
pub use user::{UserDto, UsersResponse};
