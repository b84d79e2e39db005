/// Response envelope shared by every endpoint
///
/// Bodies always have the shape:
///
/// ```json
/// { "message": "Course created successfully.", "data": { "course": { ... } } }
/// ```
///
/// `data` is `null` on errors and on endpoints with nothing to return.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{message, data}` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
    pub data: Option<Value>,
}

/// Envelope paired with its HTTP status
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Envelope,
}

impl ApiResponse {
    /// 200 with data
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    /// 201 with data
    pub fn created(message: impl Into<String>, data: Value) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status,
            body: Envelope {
                message: message.into(),
                data,
            },
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
