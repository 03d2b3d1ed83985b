//! Display implementation for application messages.
//!
//! All user-facing text lives here so the wording stays consistent between
//! the CLI output, log lines and HTTP error bodies.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Todo list API listening on http://{}", addr),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalReceived => "Shutdown signal received, finishing in-flight requests".to_string(),
            Message::DatabaseOpened(path) => format!("Using database: {}", path),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader(label) => format!("Tasks ({}):", label),

            // === SUBTASK MESSAGES ===
            Message::SubTaskCreated(id) => format!("Subtask {} created", id),
            Message::SubTaskUpdated(id) => format!("Subtask {} updated", id),
            Message::SubTaskDeleted(id) => format!("Subtask {} deleted", id),
            Message::SubTaskNotFound(id) => format!("Subtask with ID {} not found.", id),
            Message::ParentTaskMissing(id) => format!("TaskId must be a valid existing ID (task {} does not exist).", id),

            // === REQUEST MESSAGES ===
            Message::RouteIdMismatch(route, body) => format!("Route ID {} does not match body ID {}", route, body),
            Message::InvalidCompletedFilter(value) => format!("isCompleted must be 'true' or 'false', got '{}'", value),
            Message::InvalidRange(value) => format!("Unknown range '{}', expected today, tomorrow or week", value),
            Message::StorageFailure(error) => format!("Storage failure: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed".to_string(),
            Message::ConfigNothingToDelete => "No configuration file to remove".to_string(),
            Message::PromptServerHost => "Server host".to_string(),
            Message::PromptServerPort => "Server port".to_string(),
            Message::PromptDatabasePath => "Database file (empty for default location)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(current, latest) => format!("Schema version: v{} (latest v{})", current, latest),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
