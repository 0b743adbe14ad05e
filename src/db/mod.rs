// src/db/mod.rs

//! Database layer for the cookbook
//!
//! All recipe state lives in a single SQLite file. Connections are cheap and
//! short-lived: callers open one per unit of work and drop it afterwards.

pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, OpenFlags, Transaction};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// How long a connection waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the database file (if needed) and bring its schema up to date
pub fn init(db_path: &str) -> Result<()> {
    info!("Initializing database at: {}", db_path);

    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating database directory: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = open(db_path)?;
    // journal_mode persists in the file, so read-only connections inherit it
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    schema::migrate(&conn)?;

    info!("Database ready at: {}", db_path);
    Ok(())
}

/// Open a read-write connection, creating the file if it is missing
pub fn open(db_path: &str) -> Result<Connection> {
    debug!("Opening database: {}", db_path);

    let conn = Connection::open(db_path).map_err(|e| {
        Error::StorageUnavailable(format!("Failed to open database {}: {}", db_path, e))
    })?;

    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

/// Open a read-only connection to an existing database
///
/// Never creates the file and never writes to it, so a mistyped path is
/// reported instead of leaving an empty database behind.
pub fn open_read_only(db_path: &str) -> Result<Connection> {
    debug!("Opening database read-only: {}", db_path);

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(db_path, flags).map_err(|e| {
        Error::StorageUnavailable(format!("Failed to open database {}: {}", db_path, e))
    })?;

    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

/// Run `f` inside a transaction, committing on success and rolling back on error
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
