//! Product route handlers, both public and token-protected

use actix_web::{web, HttpRequest, HttpResponse};

use cg_core::gateway::CatalogGateway;

use crate::app::AppState;
use crate::dto::product::{ProductCreateRequest, ProductDto, ProductsResponse};
use crate::handlers::{ApiError, ErrorContextExt};
use crate::middleware::BearerToken;

use super::validate_request;

/// GET /auth/products: listing on behalf of the caller's bearer token
pub async fn list_authorized_products<G: CatalogGateway>(
    req: HttpRequest,
    state: web::Data<AppState<G>>,
    token: BearerToken,
) -> Result<HttpResponse, ApiError> {
    let page = state
        .product_service
        .list_authorized_products(token.as_str())
        .await
        .at(&req)?;
    Ok(HttpResponse::Ok().json(ProductsResponse::from(page)))
}

/// GET /products
pub async fn list_products<G: CatalogGateway>(
    req: HttpRequest,
    state: web::Data<AppState<G>>,
) -> Result<HttpResponse, ApiError> {
    let page = state.product_service.list_products().await.at(&req)?;
    Ok(HttpResponse::Ok().json(ProductsResponse::from(page)))
}

/// GET /products/{id}
pub async fn get_product<G: CatalogGateway>(
    req: HttpRequest,
    state: web::Data<AppState<G>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let product = state.product_service.get_product(id).await.at(&req)?;
    Ok(HttpResponse::Ok().json(ProductDto::from(product)))
}

/// POST /products/add and POST /auth/products/add
///
/// Answers 201 Created with the record the upstream created, in local naming.
pub async fn create_product<G: CatalogGateway>(
    req: HttpRequest,
    state: web::Data<AppState<G>>,
    payload: web::Json<ProductCreateRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner();
    validate_request(&request).at(&req)?;

    let created = state
        .product_service
        .create_product(request.into_new_product())
        .await
        .at(&req)?;
    Ok(HttpResponse::Created().json(ProductDto::from(created)))
}
