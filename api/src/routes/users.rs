use actix_web::{web, HttpRequest, HttpResponse};

use cg_core::gateway::CatalogGateway;

use crate::app::AppState;
use crate::dto::user::UsersResponse;
use crate::handlers::{ApiError, ErrorContextExt};

/// GET /users
pub async fn list_users<G: CatalogGateway>(
    req: HttpRequest,
    state: web::Data<AppState<G>>,
) -> Result<HttpResponse, ApiError> {
    let page = state.user_service.list_users().await.at(&req)?;
    Ok(HttpResponse::Ok().json(UsersResponse::from(page)))
}
