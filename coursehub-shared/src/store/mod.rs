/// Record store for CourseHub
///
/// All persistence goes through the [`RecordStore`] trait. The only
/// implementation today is [`json_file::JsonFileStore`], which keeps each
/// collection as a pretty-printed JSON array in its own file.
///
/// # Semantics
///
/// - Reading a missing file is an error ([`StoreError::NotFound`])
/// - Reading an empty or unparsable file yields an empty collection
/// - Every write rewrites the whole file (read-modify-write, no locking)
///
/// Concurrent writers race and the last one wins. Callers that need stronger
/// guarantees need a different store behind the same trait.
///
/// # Example
///
/// ```no_run
/// use coursehub_shared::store::{json_file::JsonFileStore, RecordKind, RecordStore};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = JsonFileStore::new("backend/db");
/// store.append(RecordKind::Courses, json!({ "id": "c1", "title": "Algebra" })).await?;
///
/// let courses = store.load(RecordKind::Courses).await?;
/// assert!(!courses.is_empty());
/// # Ok(())
/// # }
/// ```

pub mod json_file;

use async_trait::async_trait;
use serde_json::Value;
use std::{fmt, path::PathBuf};

/// Collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Registered users (`users.json`)
    Users,

    /// Created courses (`courses.json`)
    Courses,
}

impl RecordKind {
    /// File name backing this collection
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordKind::Users => "users.json",
            RecordKind::Courses => "courses.json",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Users => write!(f, "users"),
            RecordKind::Courses => write!(f, "courses"),
        }
    }
}

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing file does not exist
    #[error("The {} file does not exist: {}", .kind.file_name(), .path.display())]
    NotFound { kind: RecordKind, path: PathBuf },

    /// Record could not be serialized
    #[error("Failed to encode {kind} record: {source}")]
    Encode {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying I/O failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persistence seam for users and courses
///
/// Records are untyped JSON objects; typed access lives in
/// [`crate::models`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads every record of a collection, in file order
    async fn load(&self, kind: RecordKind) -> Result<Vec<Value>, StoreError>;

    /// Appends a record and rewrites the collection
    async fn append(&self, kind: RecordKind, record: Value) -> Result<(), StoreError>;

    /// Replaces the first record whose `"id"` equals `id`
    ///
    /// Returns whether a record matched. The collection is rewritten either
    /// way.
    async fn replace_by_id(
        &self,
        kind: RecordKind,
        id: &str,
        record: Value,
    ) -> Result<bool, StoreError>;

    /// Reports whether the collection's backing storage exists
    async fn exists(&self, kind: RecordKind) -> bool;
}
