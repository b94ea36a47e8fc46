//! Route handlers grouped by resource

pub mod auth;
pub mod products;
pub mod smoke;
pub mod users;

use validator::Validate;

use crate::dto::common::validation_details;
use crate::handlers::ApiError;

/// Run declarative validation, turning failures into a 400 with details
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), ApiError> {
    request
        .validate()
        .map_err(|errors| ApiError::invalid_input(validation_details(&errors)))
}
