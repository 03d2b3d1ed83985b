//! Configuration management for the todo list service.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the per-user
//! data directory next to the database. Every section is optional; anything
//! left out falls back to built-in defaults, and command-line flags (or the
//! matching `TODO_LIST_*` environment variables) override the file.
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 5000 },
//!   "database": { "path": "/srv/todo/todo-list.db" }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}:{}", config.host(), config.port());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Location of the SQLite file. Absent means the per-user data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Loads `config.json`, or the defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard, seeded with the current configuration.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let server = config.server.clone().unwrap_or_default();

        let host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerHost.to_string())
            .default(server.host)
            .interact_text()?;
        let port: u16 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerPort.to_string())
            .default(server.port)
            .interact_text()?;
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                config
                    .database
                    .as_ref()
                    .map(|db| db.path.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        config.server = Some(ServerConfig { host, port });
        config.database = match path.trim() {
            "" => None,
            path => Some(DatabaseConfig { path: PathBuf::from(path) }),
        };

        Ok(config)
    }

    pub fn host(&self) -> String {
        self.server.as_ref().map(|s| s.host.clone()).unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().map(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.as_ref().map(|db| db.path.clone())
    }
}
