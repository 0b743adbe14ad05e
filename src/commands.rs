// src/commands.rs
//! Command handlers for the cookbook CLI

use anyhow::{Context, Result};
use cookbook::listing::{self, PageRequest};
use cookbook::store::SqliteStore;
use tracing::info;

#[cfg(feature = "server")]
use cookbook::server::{CookbookConfig, ServerConfig};
#[cfg(feature = "server")]
use std::path::{Path, PathBuf};

/// Create or upgrade the database
pub fn cmd_init(db_path: &str) -> Result<()> {
    cookbook::db::init(db_path)?;
    println!("Database initialized successfully at: {}", db_path);
    Ok(())
}

/// Populate the database with synthetic recipes
pub fn cmd_seed(db_path: &str, count: usize, keep: bool) -> Result<()> {
    cookbook::db::init(db_path)?;
    let mut conn = cookbook::db::open(db_path)?;

    let mut rng = rand::thread_rng();
    let summary = cookbook::seed::seed(&mut conn, count, !keep, &mut rng)
        .with_context(|| format!("Failed to seed database at {}", db_path))?;

    info!(
        "Seeding complete: removed {}, inserted {}",
        summary.removed, summary.inserted
    );
    println!(
        "Seeded {} recipes into {} ({} removed)",
        summary.inserted, db_path, summary.removed
    );
    Ok(())
}

/// Print one page (or every recipe) as JSON
pub fn cmd_list(
    db_path: &str,
    page: Option<&str>,
    per_page: Option<&str>,
    all: bool,
) -> Result<()> {
    let store = SqliteStore::new(db_path);

    let json = if all {
        serde_json::to_string_pretty(&listing::list_all(&store)?)?
    } else {
        let request = PageRequest::from_params(page, per_page);
        serde_json::to_string_pretty(&listing::paginate(&store, request)?)?
    };

    println!("{}", json);
    Ok(())
}

/// Run the HTTP server until interrupted
///
/// Values given on the command line win over the config file, which wins
/// over the built-in defaults.
#[cfg(feature = "server")]
pub fn cmd_serve(
    db_path: Option<PathBuf>,
    bind: Option<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let file_config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CookbookConfig::load(path)?
        }
        None => CookbookConfig::default(),
    };

    let config = resolve_server_config(&file_config, db_path, bind)?;

    let db_path_str = config.db_path.to_string_lossy().to_string();
    cookbook::db::init(&db_path_str)
        .with_context(|| format!("Failed to prepare database at {}", db_path_str))?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(cookbook::server::run_server(config))
}

#[cfg(feature = "server")]
fn resolve_server_config(
    file_config: &CookbookConfig,
    db_path: Option<PathBuf>,
    bind: Option<String>,
) -> Result<ServerConfig> {
    let mut config = file_config.to_server_config()?;

    if let Some(path) = db_path {
        config.db_path = path;
    }
    if let Some(addr) = bind {
        config.bind_addr = addr
            .parse()
            .with_context(|| format!("Invalid bind address: {}", addr))?;
    }

    Ok(config)
}
