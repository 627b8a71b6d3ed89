// Error handling types for the API

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;

/// Field key used when the request body could not be bound
pub const BODY_FIELD: &str = "Body";
pub const BODY_INVALID_MESSAGE: &str = "Request body is missing or invalid.";

const PROBLEM_JSON: &str = "application/problem+json";
const PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Body absent, not JSON, or not the expected shape
    BindingError,
    /// Body bound but failed one or more field rules
    ValidationError(ValidationResult),
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BindingError => write!(f, "Binding Error: {}", BODY_INVALID_MESSAGE),
            ApiError::ValidationError(result) => {
                let fields: Vec<&str> = result.fields().collect();
                write!(f, "Validation Error: {}", fields.join(", "))
            }
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Structured client error body, served as `application/problem+json`
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub title: String,
    pub status: u16,
    pub errors: ValidationResult,
}

/// JSON error response structure for server faults
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn problem_response(status: StatusCode, errors: ValidationResult) -> Response {
    let body = ProblemResponse {
        title: PROBLEM_TITLE.to_string(),
        status: status.as_u16(),
        errors,
    };

    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BindingError => problem_response(
                StatusCode::BAD_REQUEST,
                ValidationResult::single(BODY_FIELD, BODY_INVALID_MESSAGE),
            ),
            ApiError::ValidationError(result) => {
                problem_response(StatusCode::UNPROCESSABLE_ENTITY, result)
            }
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                let body = ErrorResponse {
                    error: msg,
                    code: "INTERNAL_SERVER_ERROR".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        ApiError::ValidationError(result)
    }
}
