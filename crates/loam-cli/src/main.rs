//! Loam CLI
//!
//! Command-line interface for the Loam schema and seed toolkit

use clap::{Parser, Subcommand};
use loam_core::logging::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "loam")]
#[command(about = "Loam - declarative schema, migration, and seed toolkit", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = "loam.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database operations (create, upgrade, inspect)
    Db(commands::db::DbArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
}

fn main() {
    logging::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Db(args) => commands::db::execute(&cli.database, args),
        Commands::Seed(args) => commands::seed::execute(&cli.database, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
