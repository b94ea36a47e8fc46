//! Application state and factory
//!
//! This module holds the services shared by all workers and builds the
//! Actix-web application around them.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{JsonPayloadError, PathError},
    middleware::Logger,
    web, App, HttpRequest, HttpResponse, Resource, ResponseError,
};

use cg_core::gateway::CatalogGateway;
use cg_core::services::{AuthService, ProductService, UserService};
use cg_shared::config::AppConfig;

use crate::dto::common::HealthResponse;
use crate::handlers::ApiError;
use crate::middleware::{create_cors, RequestIdMiddleware};
use crate::routes::{auth, products, smoke, users};

/// Message for request bodies that are not valid JSON for the endpoint
pub const MALFORMED_JSON_MESSAGE: &str = "Malformed JSON request";

/// Application state that holds shared services
pub struct AppState<G: CatalogGateway> {
    pub auth_service: AuthService<G>,
    pub product_service: ProductService<G>,
    pub user_service: UserService<G>,
}

impl<G: CatalogGateway> AppState<G> {
    /// Build every service on top of one shared gateway
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            auth_service: AuthService::new(Arc::clone(&gateway)),
            product_service: ProductService::new(Arc::clone(&gateway)),
            user_service: UserService::new(gateway),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<G: CatalogGateway>(
    app_state: web::Data<AppState<G>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        .app_data(path_config)
        // Middleware runs outermost-last: CORS, then logging, then request IDs
        .wrap(RequestIdMiddleware)
        .wrap(Logger::new(r#"%a "%r" %s %b %Dms id=%{x-request-id}o"#))
        .wrap(create_cors(&config.cors))
        .service(endpoint("/health").route(web::get().to(health_check)))
        .service(endpoint("/").route(web::get().to(api_index)))
        .service(web::resource("/test").to(smoke::test_endpoint))
        .service(
            web::scope("/auth")
                .service(endpoint("/login").route(web::post().to(auth::login::<G>)))
                .service(
                    endpoint("/products")
                        .route(web::get().to(products::list_authorized_products::<G>)),
                )
                .service(
                    endpoint("/products/add")
                        .route(web::post().to(products::create_product::<G>)),
                ),
        )
        .service(
            web::scope("/products")
                .service(endpoint("").route(web::get().to(products::list_products::<G>)))
                .service(
                    endpoint("/add").route(web::post().to(products::create_product::<G>)),
                )
                .service(endpoint("/{id}").route(web::get().to(products::get_product::<G>))),
        )
        .service(endpoint("/users").route(web::get().to(users::list_users::<G>)))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Resource answering unsupported methods with a JSON 405
fn endpoint(path: &str) -> Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body on {}: {}", req.path(), err);
    let message = match err {
        JsonPayloadError::ContentType => "Content-Type must be application/json",
        _ => MALFORMED_JSON_MESSAGE,
    };
    ApiError::bad_request(message).with_path(req.path()).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path parameter on {}: {}", req.path(), err);
    ApiError::bad_request("Invalid path parameter")
        .with_path(req.path())
        .into()
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "catalog-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Endpoint index
async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Catalog Gateway",
        "endpoints": {
            "health": { "path": "/health", "method": "GET" },
            "test": { "path": "/test", "method": "GET" },
            "login": {
                "path": "/auth/login",
                "method": "POST",
                "request_body": {
                    "username": "string (3-50 chars)",
                    "password": "string (min 6 chars)"
                },
                "responses": {
                    "201": "Authenticated, returns the session tokens",
                    "400": "Invalid request body",
                    "401": "Invalid credentials"
                }
            },
            "authorized_products": {
                "path": "/auth/products",
                "method": "GET",
                "requires_auth": true,
                "responses": {
                    "200": "Product listing",
                    "401": "Missing, invalid or expired token",
                    "403": "Token not allowed to list products"
                }
            },
            "products": { "path": "/products", "method": "GET" },
            "product": { "path": "/products/{id}", "method": "GET" },
            "add_product": {
                "path": "/products/add",
                "method": "POST",
                "aliases": ["/auth/products/add"],
                "responses": {
                    "201": "Product created",
                    "400": "Invalid product data"
                }
            },
            "users": { "path": "/users", "method": "GET" }
        }
    }))
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    ApiError::method_not_allowed(format!(
        "HTTP method {} is not supported for this endpoint",
        req.method()
    ))
    .with_path(req.path())
    .error_response()
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::not_found(format!(
        "No endpoint {} {}",
        req.method(),
        req.path()
    ))
    .with_path(req.path())
    .error_response()
}
