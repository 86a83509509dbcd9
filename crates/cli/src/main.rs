//! Marchand CLI - Catalog seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Initialize the persisted store from the seed file
//! marchand seed
//!
//! # Re-seed, overwriting an already-seeded store
//! marchand seed --force
//!
//! # List the persisted catalog
//! marchand catalog
//!
//! # List only one category (0 means all)
//! marchand catalog --category 2
//! ```
//!
//! # Commands
//!
//! - `seed` - Initialize the persisted catalog store from seed data
//! - `catalog` - Print the persisted catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "marchand")]
#[command(author, version, about = "Marchand CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the persisted catalog store from the seed file
    Seed {
        /// Overwrite an already-seeded store
        #[arg(long)]
        force: bool,
    },
    /// Print the persisted catalog
    Catalog {
        /// Only show one category id (0 shows every product)
        #[arg(short, long)]
        category: Option<i32>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force).await?,
        Commands::Catalog { category } => commands::catalog::run(category).await?,
    }
    Ok(())
}
