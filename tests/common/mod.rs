// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::db;
use cookbook::{Error, Recipe, RecipeStore, Result};
use tempfile::TempDir;

/// Create a test database holding `count` recipes titled "Recipe 1".."Recipe N".
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_recipe_db(count: usize) -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("cookbook.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    let mut conn = db::open(&db_path).unwrap();

    db::transaction(&mut conn, |tx| {
        for i in 1..=count {
            let mut recipe = Recipe::new(
                format!("Recipe {}", i),
                format!(
                    "Preheat the oven, prepare tray {} and bake until the edges turn golden.",
                    i
                ),
                Some(15 + (i as i64 % 76)),
            )?;
            recipe.insert(tx)?;
        }
        Ok(())
    })
    .unwrap();

    (temp_dir, db_path)
}

/// Store whose backing database is never reachable
pub struct UnreachableStore;

impl RecipeStore for UnreachableStore {
    fn count(&self) -> Result<i64> {
        Err(Error::StorageUnavailable("connection refused".to_string()))
    }

    fn fetch_page(&self, _offset: i64, _limit: i64) -> Result<Vec<Recipe>> {
        Err(Error::StorageUnavailable("connection refused".to_string()))
    }

    fn fetch_all(&self) -> Result<Vec<Recipe>> {
        Err(Error::StorageUnavailable("connection refused".to_string()))
    }
}
