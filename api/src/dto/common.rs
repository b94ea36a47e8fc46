//! Small response bodies and validation helpers shared by every route

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

/// Liveness probe body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Echo of the request method, used as a smoke test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub status: String,
    pub method: String,
}

impl TestResponse {
    pub fn ok(method: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            method: method.into(),
        }
    }
}

/// Rejects strings made only of whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Flatten validation errors into `field: message` lines sorted by field.
///
/// Field names are reported in their camelCase JSON spelling.
pub fn validation_details(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<(String, _)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| (to_camel_case(&field), errors))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
