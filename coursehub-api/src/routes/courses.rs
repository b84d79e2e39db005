/// Course endpoints
///
/// # Endpoints
///
/// - `GET /api/courses` - List all courses
/// - `POST /api/courses/create` - Create a course
/// - `POST /api/courses/enroll` - Enroll a user in a course
/// - `DELETE /api/courses` - Drop a course from a user's enrollments
///
/// Enroll and drop take the client's copy of the user and modify that copy.
/// Clients never hold the password hash, so it is restored from the stored
/// record before writing back.

use crate::{app::AppState, error::ApiResult, response::ApiResponse};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use coursehub_shared::{
    enrollment,
    models::{
        course::{Course, CreateCourse, TeacherSnapshot},
        user::User,
    },
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

/// Create course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 1, message = "Credit hours must be a positive integer"))]
    pub credit_hours: u32,

    pub teacher: TeacherSnapshot,
}

/// Body shared by enroll and drop
#[derive(Debug, Deserialize)]
pub struct EnrollmentRequest {
    pub user: User,
    pub course: Course,
}

/// List all courses
///
/// # Response
///
/// ```json
/// { "message": "Courses fetched successfully.", "data": { "courses": [ ... ] } }
/// ```
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<ApiResponse> {
    let courses = Course::list(state.store()).await?;

    Ok(ApiResponse::ok(
        "Courses fetched successfully.",
        json!({ "courses": courses }),
    ))
}

/// Create a course
///
/// # Endpoint
///
/// ```text
/// POST /api/courses/create
/// Content-Type: application/json
///
/// {
///   "title": "Compilers",
///   "description": "Front to back",
///   "credit_hours": 3,
///   "teacher": { "id": "...", "email": "grace@example.com", "name": "Grace", "role": "teacher" }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty field, or `credit_hours` below 1
/// - `500 Internal Server Error`: Store failure
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let Json(req) = payload?;
    req.validate()?;

    let course = Course::create(
        state.store(),
        CreateCourse {
            title: req.title,
            description: req.description,
            credit_hours: req.credit_hours,
            teacher: req.teacher,
        },
    )
    .await?;

    tracing::info!(course_id = %course.id, teacher_id = %course.teacher.id, "Course created");

    Ok(ApiResponse::created(
        "Course created successfully.",
        json!({ "course": course }),
    ))
}

/// Enroll a user in a course
///
/// # Response
///
/// `201 Created` with the updated user:
///
/// ```json
/// { "message": "Enrolled in course successfully.", "data": { "user": { ... } } }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body or unknown user
/// - `500 Internal Server Error`: Store failure
pub async fn enroll(
    State(state): State<AppState>,
    payload: Result<Json<EnrollmentRequest>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let Json(req) = payload?;
    let user = with_stored_hash(&state, req.user).await?;

    let user = enrollment::enroll(state.store(), user, &req.course).await?;

    Ok(ApiResponse::created(
        "Enrolled in course successfully.",
        json!({ "user": user.profile() }),
    ))
}

/// Drop a course from a user's enrollments
///
/// The course must equal an enrolled snapshot field for field.
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body, unknown user, or course not enrolled
/// - `500 Internal Server Error`: Store failure
pub async fn drop_course(
    State(state): State<AppState>,
    payload: Result<Json<EnrollmentRequest>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let Json(req) = payload?;
    let user = with_stored_hash(&state, req.user).await?;

    let user = enrollment::drop_course(state.store(), user, &req.course).await?;

    Ok(ApiResponse::ok(
        "Course dropped successfully.",
        json!({ "user": user.profile() }),
    ))
}

/// Fills in the stored password hash when the client sent none
///
/// Unknown ids pass through unchanged; the workflow rejects them.
async fn with_stored_hash(state: &AppState, mut user: User) -> ApiResult<User> {
    if user.hashed_pwd.is_empty() {
        if let Some(stored) = User::find_by_id(state.store(), &user.id).await? {
            user.hashed_pwd = stored.hashed_pwd;
        }
    }
    Ok(user)
}
