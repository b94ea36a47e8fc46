//! Translation of domain and request errors into HTTP error bodies

use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use cg_core::errors::DomainError;
use cg_shared::errors::error_codes;
use thiserror::Error;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Message shown for every 5xx; details stay in the log
const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum ApiErrorKind {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request rejected before reaching a service
    #[error("{0}")]
    Unauthorized(String),

    #[error("Invalid input data")]
    InvalidInput { details: Vec<String> },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),
}

/// Error returned by every handler, optionally tagged with the request path
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ApiError {
    kind: ApiErrorKind,
    path: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind) -> Self {
        Self { kind, path: None }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized(message.into()))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest(message.into()))
    }

    pub fn invalid_input(details: Vec<String>) -> Self {
        Self::new(ApiErrorKind::InvalidInput { details })
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound(message.into()))
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::MethodNotAllowed(message.into()))
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> &ApiErrorKind {
        &self.kind
    }

    /// Label, client-facing message and field details for this error
    fn describe(&self) -> (&'static str, String, Option<Vec<String>>) {
        match &self.kind {
            ApiErrorKind::Domain(error) => match error {
                DomainError::Unauthorized(message) => {
                    (error_codes::UNAUTHORIZED, message.clone(), None)
                }
                DomainError::Forbidden(message) => (error_codes::FORBIDDEN, message.clone(), None),
                DomainError::ProductNotFound { .. } => {
                    (error_codes::PRODUCT_NOT_FOUND, error.to_string(), None)
                }
                DomainError::Validation { message, details } => (
                    error_codes::VALIDATION_FAILED,
                    message.clone(),
                    Some(details.clone()).filter(|d| !d.is_empty()),
                ),
                DomainError::Internal { .. } | DomainError::Upstream(_) => (
                    error_codes::INTERNAL_ERROR,
                    GENERIC_INTERNAL_MESSAGE.to_string(),
                    None,
                ),
            },
            ApiErrorKind::Unauthorized(message) => {
                (error_codes::UNAUTHORIZED, message.clone(), None)
            }
            ApiErrorKind::InvalidInput { details } => (
                error_codes::VALIDATION_FAILED,
                self.kind.to_string(),
                Some(details.clone()),
            ),
            ApiErrorKind::BadRequest(message) => (error_codes::BAD_REQUEST, message.clone(), None),
            ApiErrorKind::NotFound(message) => (error_codes::NOT_FOUND, message.clone(), None),
            ApiErrorKind::MethodNotAllowed(message) => {
                (error_codes::METHOD_NOT_ALLOWED, message.clone(), None)
            }
        }
    }

    /// Build the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        let (label, message, details) = self.describe();
        let mut body = ErrorResponse::new(label, message, self.status_code().as_u16());
        if let Some(path) = &self.path {
            body = body.with_path(path.clone());
        }
        if let Some(details) = details {
            body = body.with_details(details);
        }
        body
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(ApiErrorKind::Domain(error))
    }
}

impl From<ApiErrorKind> for ApiError {
    fn from(kind: ApiErrorKind) -> Self {
        Self::new(kind)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.kind {
            ApiErrorKind::Domain(error) => match error {
                DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
                DomainError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                DomainError::Internal { .. } | DomainError::Upstream(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiErrorKind::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiErrorKind::InvalidInput { .. } | ApiErrorKind::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            ApiErrorKind::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let path = self.path.as_deref().unwrap_or("-");
        if self.status_code().is_server_error() {
            log::error!("{} failed: {}", path, self.kind);
        } else {
            log::warn!("{} rejected: {}", path, self.kind);
        }
        self.to_error_response().to_response()
    }
}

/// Attach the request path to any error convertible into `ApiError`
pub trait ErrorContextExt<T> {
    fn at(self, req: &HttpRequest) -> Result<T, ApiError>;
}

impl<T, E> ErrorContextExt<T> for Result<T, E>
where
    E: Into<ApiError>,
{
    fn at(self, req: &HttpRequest) -> Result<T, ApiError> {
        self.map_err(|error| error.into().with_path(req.path()))
    }
}
