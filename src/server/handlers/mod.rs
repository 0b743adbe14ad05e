// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod recipes;
