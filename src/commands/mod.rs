//! Command-line interface.
//!
//! `serve` runs the HTTP API; the remaining subcommands are local tooling
//! over the same database and services.

pub mod init;
pub mod migrations;
pub mod serve;
pub mod tasks;

use crate::db::db::Db;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server")]
    Serve(serve::ServeArgs),
    #[command(about = "List tasks")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Database migration management")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args),
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Opens the database named by `--db`, then the config file, then the default location.
pub(crate) fn open_db(path: Option<PathBuf>, config: &Config) -> Result<Db> {
    match path.or_else(|| config.database_path()) {
        Some(path) => Db::open(path),
        None => Db::new(),
    }
}
