use crate::{
    db::{db::Db, migrations::MigrationManager},
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use rusqlite::Connection;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,

    /// Path to the SQLite database file
    #[arg(long, global = true, env = "TODO_LIST_DB")]
    db: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Compare the schema version on disk with the latest known one
    Status,
    /// List applied migrations
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = open_unmigrated(args.db)?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => status(&manager, &conn),
        MigrationsCommand::History => {
            msg_print!(Message::MigrationHistory, true);
            View::migrations(&manager.get_migration_history(&conn)?);
            Ok(())
        }
    }
}

/// `Db::open` would migrate the file before we could inspect it.
fn open_unmigrated(db: Option<PathBuf>) -> Result<Connection> {
    let path = match db {
        Some(path) => Some(path),
        None => Config::read()?.database_path(),
    };
    match path {
        Some(path) => Db::open_without_migrations(path),
        None => Db::new_without_migrations(),
    }
}

fn status(manager: &MigrationManager, conn: &Connection) -> Result<()> {
    let (current, latest) = (manager.current_version(conn)?, manager.latest_version());
    msg_print!(Message::DatabaseVersion(current, latest));
    let verdict = if current < latest {
        Message::DatabaseNeedsUpdate
    } else {
        Message::DatabaseUpToDate
    };
    msg_info!(verdict);
    Ok(())
}
