// src/listing.rs

//! Listing Service - turns page parameters into a recipe listing
//!
//! Two modes are offered:
//! - [`paginate`] returns one page wrapped in a [`Page`] envelope
//! - [`list_all`] returns every recipe as a bare sequence
//!
//! Both are stateless and make no decisions about storage errors: anything
//! the store reports is returned to the caller untouched.

use crate::db::models::Recipe;
use crate::error::Result;
use crate::store::RecipeStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page used when the caller gives none (or an unparsable one)
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller gives none (or an unparsable one)
pub const DEFAULT_PER_PAGE: i64 = 5;

/// Smallest page size; zero and negative sizes are raised to this
pub const MIN_PER_PAGE: i64 = 1;

/// Normalized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number, kept as given even when below 1
    pub page: i64,
    /// Page size, always at least [`MIN_PER_PAGE`]
    pub per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page: per_page.max(MIN_PER_PAGE),
        }
    }

    /// Build a request from raw query-string values
    ///
    /// Missing, empty, or non-integer values fall back to the defaults
    /// instead of failing the request.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self::new(
            parse_or(page, DEFAULT_PAGE),
            parse_or(per_page, DEFAULT_PER_PAGE),
        )
    }

    /// Row offset of the first item on this page, or `None` for pages below 1
    pub fn offset(&self) -> Option<i64> {
        if self.page < 1 {
            return None;
        }
        Some((self.page - 1).saturating_mul(self.per_page))
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Wire form of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: Option<i64>,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            instructions: recipe.instructions.clone(),
            minutes_to_complete: recipe.minutes_to_complete,
        }
    }
}

impl From<Recipe> for RecipeRecord {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
        }
    }
}

/// Pagination envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

/// Number of pages needed to hold `total` records, `per_page` at a time
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    let per_page = per_page.max(MIN_PER_PAGE);
    total / per_page + i64::from(total % per_page != 0)
}

/// Mode A: one page of recipes plus pagination metadata
///
/// Pages past the end, and pages below 1, come back with no items rather
/// than an error. `total` and `total_pages` always describe the whole table.
pub fn paginate<S>(store: &S, request: PageRequest) -> Result<Page<RecipeRecord>>
where
    S: RecipeStore + ?Sized,
{
    let total = store.count()?;
    let total_pages = total_pages(total, request.per_page);

    let items = match request.offset() {
        Some(offset) if offset < total => store
            .fetch_page(offset, request.per_page)?
            .into_iter()
            .map(RecipeRecord::from)
            .collect(),
        _ => Vec::new(),
    };

    debug!(
        "Page {} of {} ({} per page): {} items of {}",
        request.page,
        total_pages,
        request.per_page,
        items.len(),
        total
    );

    Ok(Page {
        page: request.page,
        per_page: request.per_page,
        total,
        total_pages,
        items,
    })
}

/// Mode B: every recipe, unwrapped
pub fn list_all<S>(store: &S) -> Result<Vec<RecipeRecord>>
where
    S: RecipeStore + ?Sized,
{
    let recipes = store.fetch_all()?;
    debug!("Listing all {} recipes", recipes.len());
    Ok(recipes.into_iter().map(RecipeRecord::from).collect())
}
