// src/db/schema.rs

//! Recipe table definition and its migrations
//!
//! The applied version lives in SQLite's own `user_version` header field.
//! Each entry of [`MIGRATIONS`] moves the file one version forward.

use crate::error::{Error, Result};
use rusqlite::Connection;
use tracing::{debug, info};

/// Ordered migration scripts; entry `n` upgrades version `n` to `n + 1`
///
/// The CHECK on `instructions` mirrors `Recipe::validate` so rows written
/// outside this crate still honor the length rule.
const MIGRATIONS: &[&str] = &["
    CREATE TABLE recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        instructions TEXT NOT NULL CHECK(length(instructions) >= 50),
        minutes_to_complete INTEGER
    );
"];

/// Version a fully migrated database reports
pub const SCHEMA_VERSION: i32 = MIGRATIONS.len() as i32;

/// Schema version recorded in the database header (0 for a fresh file)
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

/// Bring the schema up to [`SCHEMA_VERSION`]
///
/// Every step runs in its own transaction together with the version bump.
/// A database written by a newer build is refused rather than touched.
pub fn migrate(conn: &Connection) -> Result<()> {
    let current = get_schema_version(conn)?;
    if current > SCHEMA_VERSION {
        return Err(Error::InitError(format!(
            "Database schema version {} is newer than supported version {}",
            current, SCHEMA_VERSION
        )));
    }
    if current == SCHEMA_VERSION {
        debug!("Schema is up to date at version {}", current);
        return Ok(());
    }

    for (index, sql) in MIGRATIONS.iter().enumerate().skip(current.max(0) as usize) {
        let version = index as i32 + 1;
        info!("Applying schema version {}", version);

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
    }

    info!("Schema migrated to version {}", SCHEMA_VERSION);
    Ok(())
}
