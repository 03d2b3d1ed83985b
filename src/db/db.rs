use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "todo-list.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the per-user data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) the database at `path` and brings its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        msg_debug!(Message::DatabaseOpened(path.as_ref().display().to_string()));
        let mut conn = Connection::open(path)?;
        configure(&conn)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        configure(&conn)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Raw connection to the default database, for migration tooling.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open_without_migrations(db_file_path)
    }

    pub fn open_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection> {
        let conn = Connection::open(path)?;
        configure(&conn)?;

        Ok(conn)
    }
}

// Foreign keys are off by default in SQLite and must be enabled per connection.
fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}
