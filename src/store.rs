// src/store.rs

//! Recipe Store - the read boundary between the listing service and SQLite
//!
//! The listing service only ever talks to a [`RecipeStore`]. The SQLite
//! implementation opens a fresh read-only connection per call, so any number
//! of requests can read concurrently without sharing a lock.

use crate::db;
use crate::db::models::Recipe;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered, read-only access to stored recipes
///
/// Implementations must return records in one stable order across all three
/// methods, and must report connectivity or query failures as
/// [`crate::Error::StorageUnavailable`].
pub trait RecipeStore: Send + Sync {
    /// Total number of recipe records
    fn count(&self) -> Result<i64>;

    /// Up to `limit` records starting at `offset`
    ///
    /// Callers pass `offset >= 0` and `limit >= 1`. Returns fewer than
    /// `limit` records at the tail and none once `offset` reaches the end.
    fn fetch_page(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>>;

    /// Every record, in the same order `fetch_page` walks them
    fn fetch_all(&self) -> Result<Vec<Recipe>>;
}

/// SQLite-backed store reading from a database file
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<rusqlite::Connection> {
        db::open_read_only(&self.db_path.to_string_lossy())
    }
}

impl RecipeStore for SqliteStore {
    fn count(&self) -> Result<i64> {
        let conn = self.connect()?;
        Recipe::count(&conn)
    }

    fn fetch_page(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>> {
        debug_assert!(offset >= 0 && limit >= 1);
        debug!("Fetching recipes: offset={} limit={}", offset, limit);

        let conn = self.connect()?;
        // SQLite treats a negative LIMIT as unbounded
        Recipe::list_page(&conn, offset.max(0), limit.max(1))
    }

    fn fetch_all(&self) -> Result<Vec<Recipe>> {
        let conn = self.connect()?;
        Recipe::list_all(&conn)
    }
}
