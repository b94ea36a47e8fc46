use actix_web::{HttpRequest, HttpResponse};

use crate::dto::common::TestResponse;

/// Smoke-test endpoint echoing the request method
pub async fn test_endpoint(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(TestResponse::ok(req.method().as_str()))
}
