// src/seed.rs

//! Synthetic recipe generation for development databases
//!
//! Titles are short capitalized sentences, instructions are eight-sentence
//! paragraphs, and cooking times fall between 15 and 90 minutes.

use crate::db;
use crate::db::models::Recipe;
use crate::error::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use rusqlite::Connection;
use tracing::info;

/// Number of recipes written when the caller does not ask for a count
pub const DEFAULT_SEED_COUNT: usize = 500;

/// Shortest generated cooking time, in minutes
pub const MIN_MINUTES: i64 = 15;

/// Longest generated cooking time, in minutes
pub const MAX_MINUTES: i64 = 90;

const SENTENCES_PER_INSTRUCTION: usize = 8;

const WORDS: &[&str] = &[
    "roast", "garlic", "butter", "simmer", "tomato", "fresh", "basil", "whisk", "golden",
    "crispy", "lemon", "pepper", "onion", "slowly", "stock", "ginger", "honey", "smoky",
    "tender", "chili", "fold", "gently", "sauce", "herbs", "season", "toasted", "creamy",
    "braise", "rice", "beans", "mushroom", "spinach", "zest", "caramel", "dough", "knead",
    "bake", "skillet", "oven", "bowl", "pinch", "salt", "sugar", "vinegar", "olive",
];

/// Summary of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Recipes deleted before inserting
    pub removed: usize,
    /// Recipes inserted
    pub inserted: usize,
}

/// Build one random recipe
pub fn generate_recipe<R: Rng>(rng: &mut R) -> Result<Recipe> {
    let title_words = rng.gen_range(3..=6);
    let title = sentence(rng, title_words);

    let instructions = (0..SENTENCES_PER_INSTRUCTION)
        .map(|_| {
            let len = rng.gen_range(5..=12);
            sentence(rng, len)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let minutes = rng.gen_range(MIN_MINUTES..=MAX_MINUTES);

    Recipe::new(title, instructions, Some(minutes))
}

/// Replace (or extend) the recipe table with `count` generated recipes
///
/// Runs in a single transaction: either every recipe lands or none do.
pub fn seed<R: Rng>(
    conn: &mut Connection,
    count: usize,
    clear: bool,
    rng: &mut R,
) -> Result<SeedSummary> {
    db::transaction(conn, |tx| {
        let removed = if clear {
            info!("Deleting all recipes...");
            Recipe::delete_all(tx)?
        } else {
            0
        };

        info!("Creating {} recipes...", count);
        for _ in 0..count {
            let mut recipe = generate_recipe(rng)?;
            recipe.insert(tx)?;
        }

        Ok(SeedSummary {
            removed,
            inserted: count,
        })
    })
}

/// A capitalized, period-terminated sentence of `words` random words
fn sentence<R: Rng>(rng: &mut R, words: usize) -> String {
    let mut picked: Vec<&str> = (0..words)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect();
    if picked.is_empty() {
        picked.push("stir");
    }

    let mut text = picked.join(" ");
    if let Some(first) = text.get(0..1) {
        let upper = first.to_uppercase();
        text.replace_range(0..1, &upper);
    }
    text.push('.');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MIN_INSTRUCTIONS_LEN;
    use crate::db::schema;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    #[test]
    fn test_generated_recipes_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let recipe = generate_recipe(&mut rng).unwrap();
            assert!(!recipe.title.is_empty());
            assert!(recipe.title.ends_with('.'));
            assert!(recipe.instructions.chars().count() >= MIN_INSTRUCTIONS_LEN);
            let minutes = recipe.minutes_to_complete.unwrap();
            assert!((MIN_MINUTES..=MAX_MINUTES).contains(&minutes));
        }
    }

    #[test]
    fn test_sentence_is_capitalized() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = sentence(&mut rng, 4);

        assert!(text.chars().next().unwrap().is_uppercase());
        assert_eq!(text.split_whitespace().count(), 4);
    }

    #[test]
    fn test_seed_replaces_existing_rows() {
        let (_temp, mut conn) = create_test_db();
        let mut rng = StdRng::seed_from_u64(42);

        let first = seed(&mut conn, 20, true, &mut rng).unwrap();
        assert_eq!(first, SeedSummary { removed: 0, inserted: 20 });

        let second = seed(&mut conn, 5, true, &mut rng).unwrap();
        assert_eq!(second, SeedSummary { removed: 20, inserted: 5 });
        assert_eq!(Recipe::count(&conn).unwrap(), 5);
    }

    #[test]
    fn test_seed_can_append() {
        let (_temp, mut conn) = create_test_db();
        let mut rng = StdRng::seed_from_u64(3);

        seed(&mut conn, 4, true, &mut rng).unwrap();
        seed(&mut conn, 6, false, &mut rng).unwrap();

        assert_eq!(Recipe::count(&conn).unwrap(), 10);
    }
}
