/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Temporary data directory with provisioned store files
/// - Router built against that store
/// - Request helpers returning status and decoded body

use axum::body::Body;
use axum::http::{Request, StatusCode};
use coursehub_api::app::{build_router, AppState};
use coursehub_api::config::{ApiConfig, Config, StoreConfig};
use coursehub_shared::store::{json_file::JsonFileStore, RecordKind};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Test context containing all necessary resources
pub struct TestContext {
    /// Held so the directory outlives the test
    pub dir: TempDir,
    pub store: JsonFileStore,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a context with empty users and courses files
    pub async fn new() -> anyhow::Result<Self> {
        let ctx = Self::unprovisioned()?;
        ctx.store.init(RecordKind::Users).await?;
        ctx.store.init(RecordKind::Courses).await?;
        Ok(ctx)
    }

    /// Creates a context whose store files do not exist
    pub fn unprovisioned() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let store = JsonFileStore::new(dir.path());

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            store: StoreConfig {
                data_dir: dir.path().to_path_buf(),
                init_missing: false,
            },
        };

        let app = build_router(AppState::new(store.clone(), config));

        Ok(TestContext { dir, store, app })
    }

    /// Sends a request and returns the status with the parsed JSON body
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    /// Registers a user and returns the `data.user` object
    pub async fn register(&self, email: &str, password: &str, role: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/register",
                Some(json!({
                    "email": email,
                    "password": password,
                    "name": email.split('@').next().unwrap_or(email),
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        body["data"]["user"].clone()
    }

    /// Creates a course taught by `teacher` and returns `data.course`
    pub async fn create_course(&self, teacher: &Value, title: &str, credit_hours: u32) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/courses/create",
                Some(json!({
                    "title": title,
                    "description": format!("All about {}", title),
                    "credit_hours": credit_hours,
                    "teacher": {
                        "id": teacher["id"],
                        "email": teacher["email"],
                        "name": teacher["name"],
                        "role": teacher["role"],
                    },
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create course failed: {}", body);
        body["data"]["course"].clone()
    }

    /// Raw records currently stored for `kind`
    pub fn stored(&self, kind: RecordKind) -> Vec<Value> {
        let text = std::fs::read_to_string(self.store.path(kind)).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}
