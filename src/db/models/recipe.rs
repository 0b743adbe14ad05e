// src/db/models/recipe.rs

//! Recipe model - the single persisted entity
//!
//! Rows are always read back in primary-key order, which is also insertion
//! order, so every listing sees the same sequence.

use crate::error::{Error, Result};
use rusqlite::{Connection, Row, params};

/// Minimum number of characters in `instructions`
pub const MIN_INSTRUCTIONS_LEN: usize = 50;

const SELECT_COLUMNS: &str = "SELECT id, title, instructions, minutes_to_complete FROM recipes";

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
}

impl Recipe {
    /// Create a new, unsaved recipe
    ///
    /// Fails with `ValidationViolation` when `instructions` is shorter than
    /// [`MIN_INSTRUCTIONS_LEN`] characters.
    pub fn new(
        title: String,
        instructions: String,
        minutes_to_complete: Option<i64>,
    ) -> Result<Self> {
        let recipe = Self {
            id: None,
            title,
            instructions,
            minutes_to_complete,
        };
        recipe.validate()?;
        Ok(recipe)
    }

    /// Check the stored invariants
    pub fn validate(&self) -> Result<()> {
        let len = self.instructions.chars().count();
        if len < MIN_INSTRUCTIONS_LEN {
            return Err(Error::ValidationViolation(format!(
                "instructions must be at least {} characters long, got {}",
                MIN_INSTRUCTIONS_LEN, len
            )));
        }
        Ok(())
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        self.validate()?;

        conn.execute(
            "INSERT INTO recipes (title, instructions, minutes_to_complete)
             VALUES (?1, ?2, ?3)",
            params![&self.title, &self.instructions, &self.minutes_to_complete],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Total number of stored recipes
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// List up to `limit` recipes starting at `offset`, in primary-key order
    pub fn list_page(conn: &Connection, offset: i64, limit: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id LIMIT ?1 OFFSET ?2"))?;

        let recipes = stmt
            .query_map([limit, offset], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// List all recipes in primary-key order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Delete every recipe, returning how many rows were removed
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        let removed = conn.execute("DELETE FROM recipes", [])?;
        Ok(removed)
    }

    /// Convert a database row to a Recipe
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            instructions: row.get(2)?,
            minutes_to_complete: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn instructions(len: usize) -> String {
        "m".repeat(len)
    }

    fn insert_titles(conn: &Connection, titles: &[&str]) {
        for title in titles {
            let mut recipe = Recipe::new(title.to_string(), instructions(60), Some(30)).unwrap();
            recipe.insert(conn).unwrap();
        }
    }

    #[test]
    fn test_new_accepts_exactly_minimum_length() {
        let recipe = Recipe::new("Soup".to_string(), instructions(50), None).unwrap();
        assert_eq!(recipe.id, None);
        assert_eq!(recipe.minutes_to_complete, None);
    }

    #[test]
    fn test_new_rejects_short_instructions() {
        let result = Recipe::new("Soup".to_string(), instructions(49), None);
        assert!(matches!(result, Err(Error::ValidationViolation(_))));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 49 two-byte characters is still too short
        let result = Recipe::new("Crème".to_string(), "é".repeat(49), None);
        assert!(matches!(result, Err(Error::ValidationViolation(_))));

        assert!(Recipe::new("Crème".to_string(), "é".repeat(50), None).is_ok());
    }

    #[test]
    fn test_insert_revalidates_mutated_recipe() {
        let (_temp, conn) = create_test_db();

        let mut recipe = Recipe::new("Salad".to_string(), instructions(80), Some(10)).unwrap();
        recipe.instructions = "Toss.".to_string();

        assert!(matches!(
            recipe.insert(&conn),
            Err(Error::ValidationViolation(_))
        ));
        assert_eq!(Recipe::count(&conn).unwrap(), 0);
    }

    #[test]
    fn test_insert_assigns_id() {
        let (_temp, conn) = create_test_db();

        let mut recipe = Recipe::new("Chili".to_string(), instructions(75), Some(45)).unwrap();
        let id = recipe.insert(&conn).unwrap();
        assert_eq!(recipe.id, Some(id));

        assert_eq!(Recipe::list_all(&conn).unwrap(), vec![recipe]);
    }

    #[test]
    fn test_null_minutes_round_trip() {
        let (_temp, conn) = create_test_db();

        let mut recipe = Recipe::new("Bread".to_string(), instructions(50), None).unwrap();
        recipe.insert(&conn).unwrap();

        let found = Recipe::list_page(&conn, 0, 1).unwrap();
        assert_eq!(found[0].minutes_to_complete, None);
    }

    #[test]
    fn test_list_page_preserves_insertion_order() {
        let (_temp, conn) = create_test_db();
        insert_titles(&conn, &["a", "b", "c", "d", "e"]);

        let page = Recipe::list_page(&conn, 1, 2).unwrap();
        let titles: Vec<&str> = page.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_list_page_tail_and_past_end() {
        let (_temp, conn) = create_test_db();
        insert_titles(&conn, &["a", "b", "c"]);

        assert_eq!(Recipe::list_page(&conn, 2, 5).unwrap().len(), 1);
        assert!(Recipe::list_page(&conn, 3, 5).unwrap().is_empty());
        assert!(Recipe::list_page(&conn, 300, 5).unwrap().is_empty());
    }

    #[test]
    fn test_list_all_and_count() {
        let (_temp, conn) = create_test_db();
        assert_eq!(Recipe::count(&conn).unwrap(), 0);
        assert!(Recipe::list_all(&conn).unwrap().is_empty());

        insert_titles(&conn, &["x", "y", "z"]);

        assert_eq!(Recipe::count(&conn).unwrap(), 3);
        let all = Recipe::list_all(&conn).unwrap();
        let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_delete_all() {
        let (_temp, conn) = create_test_db();
        insert_titles(&conn, &["x", "y"]);

        assert_eq!(Recipe::delete_all(&conn).unwrap(), 2);
        assert_eq!(Recipe::count(&conn).unwrap(), 0);
    }
}
