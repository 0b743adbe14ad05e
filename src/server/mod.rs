// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Serves the recipe listing over HTTP:
//! - `GET /recipes` - paginated envelope (`page`, `per_page` query parameters)
//! - `GET /recipes/all` - every recipe as a bare array
//! - `GET /health` - liveness probe
//!
//! The server keeps no per-request state. Each request borrows the shared
//! store handle and runs its queries on the blocking pool.

pub mod config;
mod handlers;
mod routes;

pub use config::CookbookConfig;
pub use routes::{ApiError, ApiResult, ProblemDetails, create_router};

use crate::store::{RecipeStore, SqliteStore};
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the recipe database
    pub db_path: PathBuf,
    /// CORS allowed origins (empty = any origin)
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5555)),
            db_path: config::default_db_path(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub store: Arc<dyn RecipeStore>,
}

/// Handle passed to every handler
pub type SharedState = Arc<ServerState>;

impl ServerState {
    /// State backed by the SQLite database named in `config`
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(SqliteStore::new(config.db_path.clone()));
        Self::with_store(config, store)
    }

    /// State backed by any store implementation
    pub fn with_store(config: ServerConfig, store: Arc<dyn RecipeStore>) -> Self {
        Self { config, store }
    }
}

/// Start the cookbook server and serve until the process is stopped
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);
    if config.cors_allowed_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!("CORS: {:?}", config.cors_allowed_origins);
    }

    let bind_addr = config.bind_addr;
    let state = Arc::new(ServerState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
