// src/db/models/mod.rs

//! Data models for cookbook database entities
//!
//! Each struct corresponds to a database table and carries the methods for
//! reading and writing its rows.

mod recipe;

pub use recipe::{MIN_INSTRUCTIONS_LEN, Recipe};
