//! Storage layer for the todo list.
//!
//! SQLite is the only storage engine. Everything that touches a connection
//! lives under this module:
//!
//! - **Core Infrastructure**: connection setup (`db`) and versioned schema
//!   migrations (`migrations`)
//! - **Repositories**: `tasks` and `sub_tasks`, each a thin borrowed view over
//!   a connection plus the clock used to stamp updates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::db::{db::Db, tasks::Tasks};
//! use todo_list::libs::clock::SystemClock;
//!
//! let db = Db::new()?;
//! let tasks = Tasks::new(&db.conn, &SystemClock);
//! for task in tasks.get_for_today()? {
//!     println!("{} ({} subtasks)", task.title, task.sub_tasks.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Schema
//!
//! ```text
//! tasks(id, title, description, due_date, created_at, updated_at, priority, is_completed)
//! sub_tasks(id, task_id → tasks.id ON DELETE CASCADE, title, description,
//!           due_date, created_at, updated_at, priority, is_completed)
//! ```
//!
//! Timestamps are stored as UTC text, so `date(due_date)` yields the UTC
//! calendar date used by the range queries.

/// Connection management and initialization.
pub mod db;

/// Error type shared by the repositories.
pub mod error;

/// Versioned schema migrations.
pub mod migrations;

/// Subtask persistence.
pub mod sub_tasks;

/// Task persistence and date-range queries.
pub mod tasks;

pub use error::RepositoryError;
