/// Course model and store operations
///
/// A course embeds a [`TeacherSnapshot`] copied from the creating teacher.
/// Courses are never updated or deleted once created.

use super::user::{Role, User};
use crate::store::{RecordKind, RecordStore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Teacher fields copied into a course at creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSnapshot {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for TeacherSnapshot {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Stored course record
///
/// Equality is field by field, teacher snapshot included. Dropping a course
/// relies on this to find the enrolled copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Server-generated identifier (UUID v4, hyphenated)
    pub id: String,

    pub title: String,

    pub description: String,

    /// Positive number of credit hours
    pub credit_hours: u32,

    pub teacher: TeacherSnapshot,
}

/// Input for creating a new course
#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub credit_hours: u32,
    pub teacher: TeacherSnapshot,
}

impl Course {
    /// Lists every course in store order
    pub async fn list(store: &dyn RecordStore) -> Result<Vec<Self>, StoreError> {
        let records = store.load(RecordKind::Courses).await?;

        let courses = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Course>(record) {
                Ok(course) => Some(course),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed course record");
                    None
                }
            })
            .collect();

        Ok(courses)
    }

    /// Creates a course with a fresh id
    pub async fn create(store: &dyn RecordStore, data: CreateCourse) -> Result<Self, StoreError> {
        let course = Course {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            credit_hours: data.credit_hours,
            teacher: data.teacher,
        };

        let record = serde_json::to_value(&course).map_err(|source| StoreError::Encode {
            kind: RecordKind::Courses,
            source,
        })?;
        store.append(RecordKind::Courses, record).await?;

        Ok(course)
    }

    /// Finds a course by id
    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<Self>, StoreError> {
        let courses = Self::list(store).await?;
        Ok(courses.into_iter().find(|c| c.id == id))
    }
}
