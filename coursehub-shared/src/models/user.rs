/// User model and store operations
///
/// Users are kept in the `users` collection as one JSON object each:
///
/// ```json
/// {
///     "id": "9b2f...",
///     "email": "ada@example.com",
///     "role": "student",
///     "name": "Ada",
///     "hashed_pwd": "$argon2id$...",
///     "enrolled_courses": []
/// }
/// ```
///
/// `enrolled_courses` holds full [`Course`] snapshots, copied at enrollment
/// time. They are not refreshed when the course changes.
///
/// # Example
///
/// ```no_run
/// use coursehub_shared::models::user::{CreateUser, Role, User};
/// use coursehub_shared::store::json_file::JsonFileStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = JsonFileStore::new("backend/db");
///
/// let user = User::create(
///     &store,
///     CreateUser {
///         email: "ada@example.com".to_string(),
///         name: "Ada".to_string(),
///         role: Role::Student,
///         hashed_pwd: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
///
/// let found = User::find_by_email(&store, "ada@example.com").await?;
/// assert_eq!(found.map(|u| u.id), Some(user.id));
/// # Ok(())
/// # }
/// ```

use super::course::Course;
use crate::store::{RecordKind, RecordStore, StoreError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;
use uuid::Uuid;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can create courses
    Teacher,

    /// Can enroll in and drop courses
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Teacher => write!(f, "teacher"),
            Role::Student => write!(f, "student"),
        }
    }
}

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-generated identifier (UUID v4, hyphenated)
    pub id: String,

    /// Email address, compared case-sensitively
    pub email: String,

    pub role: Role,

    /// Display name
    pub name: String,

    /// Argon2id PHC string
    ///
    /// Clients never receive this; a user echoed back by a client arrives
    /// with it empty.
    #[serde(default)]
    pub hashed_pwd: String,

    /// Course snapshots in enrollment order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enrolled_courses: Vec<Course>,
}

/// User as returned to clients (no password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub enrolled_courses: Vec<Course>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub role: Role,

    /// Already-hashed password (NOT plaintext)
    pub hashed_pwd: String,
}

/// Older records carry `"enrolled_courses": null` for an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Course>>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Lists every user in store order
    ///
    /// Records that fail to decode are skipped and logged.
    pub async fn list(store: &dyn RecordStore) -> Result<Vec<Self>, StoreError> {
        let records = store.load(RecordKind::Users).await?;

        let users = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<User>(record) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed user record");
                    None
                }
            })
            .collect();

        Ok(users)
    }

    /// Creates a new user with a fresh id and no enrollments
    ///
    /// Does not check for duplicate emails; callers do that first.
    pub async fn create(store: &dyn RecordStore, data: CreateUser) -> Result<Self, StoreError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: data.email,
            role: data.role,
            name: data.name,
            hashed_pwd: data.hashed_pwd,
            enrolled_courses: Vec::new(),
        };

        store.append(RecordKind::Users, user.to_record()?).await?;

        Ok(user)
    }

    /// Finds the first user with exactly this email
    pub async fn find_by_email(
        store: &dyn RecordStore,
        email: &str,
    ) -> Result<Option<Self>, StoreError> {
        let users = Self::list(store).await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// Whether any stored record has exactly this email
    ///
    /// Scans the raw records, so entries that no longer decode as a
    /// [`User`] still count.
    pub async fn email_taken(store: &dyn RecordStore, email: &str) -> Result<bool, StoreError> {
        let records = store.load(RecordKind::Users).await?;
        Ok(records
            .iter()
            .any(|record| record.get("email").and_then(serde_json::Value::as_str) == Some(email)))
    }

    /// Finds a user by id
    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<Self>, StoreError> {
        let users = Self::list(store).await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Replaces the stored record with the same id
    ///
    /// Returns false if no record has this id; nothing is inserted in that
    /// case.
    pub async fn replace(store: &dyn RecordStore, user: &User) -> Result<bool, StoreError> {
        store
            .replace_by_id(RecordKind::Users, &user.id, user.to_record()?)
            .await
    }

    /// Client-facing view of this user
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
            name: self.name.clone(),
            enrolled_courses: self.enrolled_courses.clone(),
        }
    }

    /// Sum of credit hours across enrolled courses
    ///
    /// Summed as `u64`; `credit_hours` has no upper bound.
    pub fn enrolled_credit_hours(&self) -> u64 {
        self.enrolled_courses
            .iter()
            .map(|c| u64::from(c.credit_hours))
            .sum()
    }

    fn to_record(&self) -> Result<serde_json::Value, StoreError> {
        serde_json::to_value(self).map_err(|source| StoreError::Encode {
            kind: RecordKind::Users,
            source,
        })
    }
}
