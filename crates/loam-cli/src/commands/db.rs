//! Database commands
//!
//! Usage:
//!   loam db create
//!   loam db upgrade head
//!   loam db tables

use clap::{Args, Subcommand};
use loam_core::{ColumnDef, ColumnType, DefaultRule, SchemaRegistry, TableDef};
use std::path::Path;

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the built-in curriculum tables if absent (idempotent)
    Create,
    /// Apply pending migrations
    Upgrade(UpgradeArgs),
    /// List physical tables
    Tables,
}

#[derive(Debug, Args)]
pub struct UpgradeArgs {
    /// Migration target; only "head" (all pending) is supported
    #[arg(default_value = "head")]
    pub target: String,
}

/// The curriculum schema, declared through the schema declarator
///
/// Mirrors what the embedded migrations build, letting `db create` stand in
/// for the one-shot `create_all` lesson workflow.
pub fn curriculum_registry() -> Result<SchemaRegistry, Box<dyn std::error::Error>> {
    let mut registry = SchemaRegistry::new();

    registry.register(
        TableDef::new("students")
            .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
            .column(ColumnDef::new("name", ColumnType::Text).not_null())
            .column(ColumnDef::new("email", ColumnType::Text))
            .column(ColumnDef::new("grade", ColumnType::Integer))
            .column(ColumnDef::new("birthday", ColumnType::Text))
            .column(
                ColumnDef::new("enrolled_date", ColumnType::Timestamp)
                    .default_rule(DefaultRule::CurrentTimestamp),
            )
            .build()?,
    )?;

    registry.register(
        TableDef::new("games")
            .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
            .column(ColumnDef::new("title", ColumnType::Text).not_null())
            .column(ColumnDef::new("genre", ColumnType::Text))
            .column(ColumnDef::new("platform", ColumnType::Text))
            .column(ColumnDef::new("price", ColumnType::Integer))
            .build()?,
    )?;

    Ok(registry)
}

/// Execute db command
pub fn execute(database: &Path, args: DbArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DbCommand::Create => execute_create(database),
        DbCommand::Upgrade(upgrade_args) => execute_upgrade(database, upgrade_args),
        DbCommand::Tables => execute_tables(database),
    }
}

fn execute_create(database: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let registry = curriculum_registry()?;

    let conn = loam_store::db::open(database)?;
    loam_store::db::configure(&conn)?;
    loam_store::persist::create_all(&conn, &registry)?;

    println!("✓ Created {} table(s) in {}", registry.len(), database.display());
    Ok(())
}

fn execute_upgrade(database: &Path, args: UpgradeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.target != "head" {
        return Err(format!(
            "Unsupported migration target '{}'; only 'head' is supported",
            args.target
        )
        .into());
    }

    let mut conn = loam_store::db::open(database)?;
    loam_store::db::configure(&conn)?;
    loam_store::migrations::apply_migrations(&mut conn)?;

    let applied = loam_store::migrations::applied_migrations(&conn)?;
    println!("✓ Database is at head ({} migration(s) applied)", applied.len());
    Ok(())
}

fn execute_tables(database: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = loam_store::db::open(database)?;
    for name in loam_store::persist::table_names(&conn)? {
        println!("{}", name);
    }
    Ok(())
}
