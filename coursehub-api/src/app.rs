/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use coursehub_api::{app::AppState, config::Config};
/// use coursehub_shared::store::json_file::JsonFileStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let store = JsonFileStore::new(&config.store.data_dir);
/// let state = AppState::new(store, config);
/// let app = coursehub_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use coursehub_shared::store::RecordStore;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request via Axum's `State` extractor. Handlers get
/// everything they need from here and from the request body; there is no
/// per-user server state.
#[derive(Clone)]
pub struct AppState {
    /// Record store for users and courses
    pub store: Arc<dyn RecordStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: impl RecordStore + 'static, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Store as a trait object, for model and workflow calls
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET    /                       # Welcome message
/// ├── GET    /health                 # Store health
/// └── /api/
///     ├── POST   /login
///     ├── POST   /register
///     ├── GET    /courses            # List courses
///     ├── DELETE /courses            # Drop a course
///     ├── POST   /courses/create
///     └── POST   /courses/enroll
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let public_routes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check));

    let api_routes = Router::new()
        .route("/login", post(routes::auth::login))
        .route("/register", post(routes::auth::register))
        .route(
            "/courses",
            get(routes::courses::list_courses).delete(routes::courses::drop_course),
        )
        .route("/courses/create", post(routes::courses::create_course))
        .route("/courses/enroll", post(routes::courses::enroll));

    let cors = if state.config.cors_permissive() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
