//! # CourseHub API Server
//!
//! HTTP API for the course enrollment system: registration and login,
//! course creation and listing, enrolling and dropping courses. State lives
//! in two JSON files under the configured data directory.
//!
//! ## Usage
//!
//! ```bash
//! COURSEHUB_DATA_DIR=backend/db COURSEHUB_INIT_STORE=true cargo run -p coursehub-api
//! ```

use coursehub_api::{
    app::{build_router, AppState},
    config::Config,
};
use coursehub_shared::store::{json_file::JsonFileStore, RecordKind, RecordStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursehub_api=debug,coursehub_shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "CourseHub API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let store = JsonFileStore::new(&config.store.data_dir);
    for kind in [RecordKind::Users, RecordKind::Courses] {
        if config.store.init_missing {
            store.init(kind).await?;
        } else if !store.exists(kind).await {
            tracing::warn!(path = %store.path(kind).display(), "Store file missing; {} requests will fail", kind);
        }
    }

    let bind_address = config.bind_address();
    let state = AppState::new(store, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
