// src/server/handlers/recipes.rs
//! Recipe listing handlers
//!
//! Thin adapters over [`crate::listing`]: they read the query string, run
//! the listing on the blocking pool, and hand back JSON.

use crate::listing::{self, Page, PageRequest, RecipeRecord};
use crate::server::{ApiResult, SharedState};
use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use tracing::debug;

/// Raw query pairs, in the order they appeared
///
/// Kept as strings so a malformed value falls back to its default instead
/// of rejecting the request. A repeated key is not an error either: the
/// first occurrence wins.
type QueryPairs = Vec<(String, String)>;

fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// GET /recipes?page=N&per_page=M
///
/// Returns one page of recipes with pagination metadata. Defaults to the
/// first page of five.
pub async fn list_recipes(
    State(state): State<SharedState>,
    Query(pairs): Query<QueryPairs>,
) -> ApiResult<Json<Page<RecipeRecord>>> {
    let request = PageRequest::from_params(
        first_param(&pairs, "page"),
        first_param(&pairs, "per_page"),
    );
    debug!(
        "List recipes: page={} per_page={}",
        request.page, request.per_page
    );

    let store = Arc::clone(&state.store);
    let page = tokio::task::spawn_blocking(move || listing::paginate(store.as_ref(), request))
        .await??;

    Ok(Json(page))
}

/// GET /recipes/all
///
/// Returns every recipe as a bare JSON array, no envelope.
pub async fn list_all_recipes(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<RecipeRecord>>> {
    let store = Arc::clone(&state.store);
    let recipes = tokio::task::spawn_blocking(move || listing::list_all(store.as_ref())).await??;

    Ok(Json(recipes))
}
