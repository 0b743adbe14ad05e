// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => commands::cmd_init(&db_path),
        Some(Commands::Seed {
            db_path,
            count,
            keep,
        }) => commands::cmd_seed(&db_path, count, keep),
        Some(Commands::List {
            db_path,
            page,
            per_page,
            all,
        }) => commands::cmd_list(&db_path, page.as_deref(), per_page.as_deref(), all),
        #[cfg(feature = "server")]
        Some(Commands::Serve {
            db_path,
            bind,
            config,
        }) => commands::cmd_serve(db_path, bind, config.as_deref()),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
