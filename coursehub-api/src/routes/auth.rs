/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/login` - Check credentials and return the user
/// - `POST /api/register` - Create a new user
///
/// No token is issued. The client keeps the returned user object and sends
/// it back with enrollment requests.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response::ApiResponse,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use coursehub_shared::{
    auth::password,
    models::user::{CreateUser, Role, User},
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub role: Role,
}

/// Login endpoint
///
/// # Endpoint
///
/// ```text
/// POST /api/login
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "hunter2" }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Login successful.", "data": { "user": { "id": "...", ... } } }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body
/// - `404 Not Found`: No user with this email
/// - `401 Unauthorized`: Wrong password
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let Json(req) = payload?;

    let user = User::find_by_email(state.store(), &req.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

    if !password::verify_password(&req.password, &user.hashed_pwd)? {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(ApiError::Unauthorized("Invalid password.".to_string()));
    }

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiResponse::ok(
        "Login successful.",
        json!({ "user": user.profile() }),
    ))
}

/// Register a new user
///
/// Email uniqueness is checked by scanning existing users, case-sensitively.
///
/// # Endpoint
///
/// ```text
/// POST /api/register
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "hunter2", "name": "Ada", "role": "student" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "message": "User created successfully.", "data": { "user": { "id": "...", "enrolled_courses": [] } } }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Email already registered, missing field, or unknown role
/// - `500 Internal Server Error`: Store failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let Json(req) = payload?;
    req.validate()?;

    if User::email_taken(state.store(), &req.email).await? {
        return Err(ApiError::BadRequest("User already exists.".to_string()));
    }

    let hashed_pwd = password::hash_password(&req.password)?;

    let user = User::create(
        state.store(),
        CreateUser {
            email: req.email,
            name: req.name,
            role: req.role,
            hashed_pwd,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok(ApiResponse::created(
        "User created successfully.",
        json!({ "user": user.profile() }),
    ))
}
