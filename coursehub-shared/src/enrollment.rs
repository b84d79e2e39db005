/// Enrollment workflow
///
/// Enrolling copies a course into the user's `enrolled_courses`; dropping
/// removes one copy. Both persist the user through [`User::replace`].
///
/// The user passed in is the caller's copy, not a fresh read. Whatever list
/// it carries is the base that gets modified and written back.
///
/// No credit-hour ceiling is enforced here, and enrolling twice in the same
/// course stores two snapshots.
///
/// # Example
///
/// ```no_run
/// use coursehub_shared::enrollment;
/// use coursehub_shared::models::{course::Course, user::User};
/// use coursehub_shared::store::json_file::JsonFileStore;
///
/// # async fn example(user: User, course: Course) -> Result<(), Box<dyn std::error::Error>> {
/// let store = JsonFileStore::new("backend/db");
///
/// let user = enrollment::enroll(&store, user, &course).await?;
/// let user = enrollment::drop_course(&store, user, &course).await?;
/// # Ok(())
/// # }
/// ```

use crate::models::{course::Course, user::User};
use crate::store::{RecordStore, StoreError};
use tracing::info;

/// Error type for enrollment operations
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    /// The user's id matched no stored record
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The course to drop is not in the user's enrolled list
    #[error("Course {0} is not in the enrolled courses")]
    NotEnrolled(String),

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Appends a snapshot of `course` to the user's enrollments and persists
///
/// # Errors
///
/// - [`EnrollmentError::UserNotFound`] if no stored user has this id
/// - [`EnrollmentError::Store`] if the store cannot be read or written
pub async fn enroll(
    store: &dyn RecordStore,
    mut user: User,
    course: &Course,
) -> Result<User, EnrollmentError> {
    user.enrolled_courses.push(course.clone());

    if !User::replace(store, &user).await? {
        return Err(EnrollmentError::UserNotFound(user.id));
    }

    info!(
        user_id = %user.id,
        course_id = %course.id,
        credit_hours = user.enrolled_credit_hours(),
        "User enrolled in course"
    );

    Ok(user)
}

/// Removes the first enrolled snapshot equal to `course` and persists
///
/// Equality is field by field. A course whose fields changed since the
/// snapshot was taken will not match.
///
/// # Errors
///
/// - [`EnrollmentError::NotEnrolled`] if no snapshot matches
/// - [`EnrollmentError::UserNotFound`] if no stored user has this id
/// - [`EnrollmentError::Store`] if the store cannot be read or written
pub async fn drop_course(
    store: &dyn RecordStore,
    mut user: User,
    course: &Course,
) -> Result<User, EnrollmentError> {
    let position = user
        .enrolled_courses
        .iter()
        .position(|enrolled| enrolled == course)
        .ok_or_else(|| EnrollmentError::NotEnrolled(course.id.clone()))?;

    user.enrolled_courses.remove(position);

    if !User::replace(store, &user).await? {
        return Err(EnrollmentError::UserNotFound(user.id));
    }

    info!(user_id = %user.id, course_id = %course.id, "User dropped course");

    Ok(user)
}
