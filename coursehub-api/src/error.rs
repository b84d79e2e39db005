/// Error handling for the API server
///
/// Handlers return `ApiResult<ApiResponse>`; every error becomes the same
/// `{message, data}` envelope used for successes, with `data` set to `null`
/// (or to the list of field errors for validation failures).
///
/// Internal errors are logged with their detail and answered with a fixed
/// message.
///
/// # Example
///
/// ```
/// use coursehub_api::error::{ApiError, ApiResult};
/// use coursehub_api::response::ApiResponse;
/// use serde_json::json;
///
/// fn handler(title: &str) -> ApiResult<ApiResponse> {
///     if title.is_empty() {
///         return Err(ApiError::BadRequest("Title is required.".to_string()));
///     }
///     Ok(ApiResponse::ok("ok", json!({ "title": title })))
/// }
/// ```

use crate::response::Envelope;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coursehub_shared::{
    auth::password::PasswordError, enrollment::EnrollmentError, store::StoreError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Message sent for every 500
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400), including duplicate email
    BadRequest(String),

    /// Wrong password (401)
    Unauthorized(String),

    /// Unknown login email (404)
    NotFound(String),

    /// Field validation failed (400)
    ValidationError(Vec<ValidationErrorDetail>),

    /// Internal server error (500); the detail is only logged
    InternalError(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, data) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                "Request validation failed.".to_string(),
                Some(serde_json::json!({ "errors": errors })),
            ),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
        };

        (status, Json(Envelope { message, data })).into_response()
    }
}

/// Malformed or incomplete request bodies
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors: Vec<ValidationErrorDetail> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field)),
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::ValidationError(errors)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(format!("Store error: {}", err))
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}

impl From<EnrollmentError> for ApiError {
    fn from(err: EnrollmentError) -> Self {
        match err {
            EnrollmentError::UserNotFound(_) => ApiError::BadRequest("User not found.".to_string()),
            EnrollmentError::NotEnrolled(_) => {
                ApiError::BadRequest("Course not found in enrolled courses.".to_string())
            }
            EnrollmentError::Store(err) => err.into(),
        }
    }
}
