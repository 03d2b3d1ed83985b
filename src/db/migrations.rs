//! Versioned schema migrations.
//!
//! Each migration has a version, a name and a batch of SQL. Pending
//! migrations run in version order inside a single transaction and are
//! recorded in the `migrations` table, so opening an up-to-date database is a
//! single `MAX(version)` lookup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("todo-list.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

/// Schema history, oldest first. Versions must be strictly increasing.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_tasks_and_sub_tasks",
        sql: "
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER NOT NULL PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                due_date TIMESTAMP NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP,
                priority INTEGER NOT NULL DEFAULT 0 CHECK (priority BETWEEN 0 AND 3),
                is_completed BOOLEAN NOT NULL DEFAULT FALSE
            );
            CREATE TABLE IF NOT EXISTS sub_tasks (
                id INTEGER NOT NULL PRIMARY KEY,
                task_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                due_date TIMESTAMP NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP,
                priority INTEGER NOT NULL DEFAULT 0 CHECK (priority BETWEEN 0 AND 3),
                is_completed BOOLEAN NOT NULL DEFAULT FALSE,
                FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
            );",
    },
    Migration {
        version: 2,
        name: "add_query_indices",
        sql: "
            CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
            CREATE INDEX IF NOT EXISTS idx_tasks_is_completed ON tasks(is_completed);
            CREATE INDEX IF NOT EXISTS idx_sub_tasks_task_id ON sub_tasks(task_id);",
    },
];

/// One row of the `migrations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub version: u32,
    pub name: String,
    pub applied_at: String,
}

/// Applies and inspects the schema history in [`MIGRATIONS`].
#[derive(Debug, Default)]
pub struct MigrationManager;

impl MigrationManager {
    pub fn new() -> Self {
        MigrationManager
    }

    /// Applies every migration newer than the current schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current = self.current_version(conn)?;
        let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();
        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = tx.execute_batch(migration.sql) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e).with_context(|| format!("migration v{} ({})", migration.version, migration.name));
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 when nothing has been applied yet.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        let table_exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
            [],
            |row| row.get(0),
        )?;
        if !table_exists {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        MIGRATIONS.last().map_or(0, |m| m.version)
    }

    /// Applied migrations ordered by version. Empty for a database that was never migrated.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<AppliedMigration>> {
        if self.current_version(conn)? == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| {
                Ok(AppliedMigration {
                    version: row.get(0)?,
                    name: row.get(1)?,
                    applied_at: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.current_version(conn)? < manager.latest_version())
}
