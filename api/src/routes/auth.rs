//! Authentication route handlers

use actix_web::{web, HttpRequest, HttpResponse};

use cg_core::gateway::CatalogGateway;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::{ApiError, ErrorContextExt};
use crate::middleware::RequestIdExt;

use super::validate_request;

/// Handler for POST /auth/login
///
/// Validates the credentials, forwards them upstream and answers
/// 201 Created with the session. Rejected credentials give 401.
pub async fn login<G: CatalogGateway>(
    req: HttpRequest,
    state: web::Data<AppState<G>>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request_id = req.request_id().unwrap_or_default();
    let request = payload.into_inner();
    validate_request(&request).at(&req)?;

    let credentials = request.into_credentials();
    log::info!(
        "[{}] Login attempt for user: {}",
        request_id,
        credentials.username
    );

    let session = state
        .auth_service
        .authenticate(&credentials)
        .await
        .at(&req)?;

    log::info!("[{}] Login succeeded for user: {}", request_id, session.username);
    Ok(HttpResponse::Created().json(LoginResponse::from(session)))
}
