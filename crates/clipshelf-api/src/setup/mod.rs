//! Application setup and initialization
//!
//! Startup wiring lives here rather than in main.rs so integration tests can
//! assemble the same pieces against their own database and storage root.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use clipshelf_core::Config;
use clipshelf_storage::LocalStorage;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. `RUST_LOG` controls filtering, with a
/// sensible default when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Initialize the entire application: storage root, database pool and
/// migrations, state, and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let storage = LocalStorage::new(config.storage_path.clone())
        .await
        .context("Failed to initialize video storage")?;
    tracing::info!(root = %storage.root().display(), "Video storage ready");

    let pool = database::setup_database(&config).await?;

    let state = Arc::new(AppState::new(pool, Arc::new(storage)));

    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}
