//! Bearer token extraction for endpoints that forward the caller's token.
//!
//! The gateway does not verify tokens itself; it only checks that a bearer
//! token is present and passes it upstream untouched.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::handlers::ApiError;

/// Message returned when no usable bearer token is present
pub const MISSING_BEARER_MESSAGE: &str = "Missing or invalid Authorization header";

/// Bearer token taken from the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for BearerToken {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = extract_bearer_token(req).map(BearerToken).ok_or_else(|| {
            ApiError::unauthorized(MISSING_BEARER_MESSAGE).with_path(req.path())
        });
        ready(result)
    }
}

/// Extracts a non-empty, trimmed token from a `Bearer` Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test::TestRequest, ResponseError};

    fn token_for(header: Option<&str>) -> Option<String> {
        let mut req = TestRequest::default();
        if let Some(value) = header {
            req = req.insert_header((AUTHORIZATION, value));
        }
        extract_bearer_token(&req.to_http_request())
    }

    #[test]
    fn test_accepted_headers() {
        assert_eq!(
            token_for(Some("Bearer token-emilys")).as_deref(),
            Some("token-emilys")
        );
        assert_eq!(
            token_for(Some("Bearer   eyJhbGci  ")).as_deref(),
            Some("eyJhbGci")
        );
    }

    #[test]
    fn test_rejected_headers() {
        let rejected = [
            None,
            Some("token-emilys"),
            Some("Basic dXNlcjpwYXNz"),
            Some("Bearer    "),
            Some("bearer abc"),
        ];
        for header in rejected {
            assert_eq!(token_for(header), None, "header {:?}", header);
        }
    }

    #[actix_rt::test]
    async fn test_extractor_error_is_unauthorized_with_path() {
        let req = TestRequest::get().uri("/auth/products").to_http_request();

        let error = BearerToken::extract(&req).await.unwrap_err();

        assert_eq!(error.status_code(), 401);
        let body = error.to_error_response();
        assert_eq!(body.message, MISSING_BEARER_MESSAGE);
        assert_eq!(body.path.as_deref(), Some("/auth/products"));
    }
}
