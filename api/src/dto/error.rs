use actix_web::http::StatusCode;
pub use cg_shared::errors::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self) -> actix_web::HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    /// Respond with the status carried in the body itself
    fn to_response(&self) -> actix_web::HttpResponse {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        actix_web::HttpResponse::build(status).json(self)
    }
}
