// src/lib.rs

//! Cookbook - a read-only recipe catalogue
//!
//! Recipes live in a single SQLite table and are served as JSON, either one
//! page at a time or as one complete listing.
//!
//! # Architecture
//!
//! - `db`: schema, migrations, and the `Recipe` row type (the only write path)
//! - `store`: the `RecipeStore` read boundary and its SQLite implementation
//! - `listing`: pagination rules and the wire format
//! - `server`: axum routes over the listing service
//! - `seed`: synthetic data for development databases

pub mod db;
mod error;
pub mod listing;
pub mod seed;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

pub use db::models::Recipe;
pub use error::{Error, Result};
pub use listing::{Page, PageRequest, RecipeRecord};
pub use store::{RecipeStore, SqliteStore};
