/// JSON file implementation of [`RecordStore`]
///
/// Each collection lives at `<root>/<kind>.json` as a single JSON array.
/// Files are rewritten in full on every mutation, indented with four spaces.
///
/// Files are never created implicitly by `load`, `append` or
/// `replace_by_id`; use [`JsonFileStore::init`] to provision an empty store.

use super::{RecordKind, RecordStore, StoreError};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Store rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`
    ///
    /// Nothing is touched on disk until the first operation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `kind`
    pub fn path(&self, kind: RecordKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    /// Creates the data directory and an empty `[]` file for `kind`
    ///
    /// Existing files are left untouched.
    pub async fn init(&self, kind: RecordKind) -> Result<(), StoreError> {
        let path = self.path(kind);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;

        debug!(path = %path.display(), "Creating empty {} store", kind);
        self.write_all(kind, &[]).await
    }

    /// Fails with `NotFound` unless the backing file exists
    async fn require(&self, kind: RecordKind) -> Result<PathBuf, StoreError> {
        let path = self.path(kind);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Ok(path),
            Ok(false) => Err(StoreError::NotFound { kind, path }),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Reads and decodes the collection, treating bad JSON as empty
    async fn read_all(&self, kind: RecordKind) -> Result<Vec<Value>, StoreError> {
        let path = self.require(kind).await?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                if !bytes.iter().all(u8::is_ascii_whitespace) {
                    warn!(path = %path.display(), error = %e, "Unreadable {} store, treating as empty", kind);
                }
                Ok(Vec::new())
            }
        }
    }

    /// Rewrites the whole collection
    async fn write_all(&self, kind: RecordKind, records: &[Value]) -> Result<(), StoreError> {
        let path = self.path(kind);
        let bytes = encode_pretty(records).map_err(|source| StoreError::Encode { kind, source })?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), count = records.len(), "Wrote {} store", kind);
        Ok(())
    }
}

/// Serializes with four-space indentation
fn encode_pretty(records: &[Value]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self, kind: RecordKind) -> Result<Vec<Value>, StoreError> {
        self.read_all(kind).await
    }

    async fn append(&self, kind: RecordKind, record: Value) -> Result<(), StoreError> {
        let mut records = self.read_all(kind).await?;
        records.push(record);
        self.write_all(kind, &records).await
    }

    async fn replace_by_id(
        &self,
        kind: RecordKind,
        id: &str,
        record: Value,
    ) -> Result<bool, StoreError> {
        let mut records = self.read_all(kind).await?;

        let slot = records
            .iter_mut()
            .find(|existing| existing.get("id").and_then(Value::as_str) == Some(id));

        let matched = match slot {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                warn!(id, "No {} record to replace", kind);
                false
            }
        };

        self.write_all(kind, &records).await?;
        Ok(matched)
    }

    async fn exists(&self, kind: RecordKind) -> bool {
        self.require(kind).await.is_ok()
    }
}
