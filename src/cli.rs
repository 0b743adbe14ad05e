// src/cli.rs
//! CLI definitions for the cookbook
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
#[cfg(feature = "server")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "Serve a read-only recipe catalogue over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or upgrade the recipe database
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = "cookbook.db")]
        db_path: String,
    },

    /// Fill the database with synthetic recipes
    Seed {
        /// Path to the database file
        #[arg(short, long, default_value = "cookbook.db")]
        db_path: String,

        /// Number of recipes to create
        #[arg(short, long, default_value_t = cookbook::seed::DEFAULT_SEED_COUNT)]
        count: usize,

        /// Keep existing recipes instead of deleting them first
        #[arg(long)]
        keep: bool,
    },

    /// Print a recipe listing as JSON
    List {
        /// Path to the database file
        #[arg(short, long, default_value = "cookbook.db")]
        db_path: String,

        /// Page number (1-based)
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,

        /// Recipes per page
        #[arg(long, allow_hyphen_values = true)]
        per_page: Option<String>,

        /// Print every recipe as a bare array instead of one page
        #[arg(long, conflicts_with_all = ["page", "per_page"])]
        all: bool,
    },

    /// Start the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<PathBuf>,

        /// Address to bind to (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
