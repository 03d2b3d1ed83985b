//! # Todo List
//!
//! Backend for a personal task list: tasks with nested subtasks, stored in
//! SQLite and served as a JSON API.
//!
//! ## Features
//!
//! - **Tasks and subtasks**: create, read, update and delete
//! - **Date buckets**: tasks due today, tomorrow or this week (Monday to Sunday)
//! - **HTTP API**: axum router under `/api/todo-list`
//! - **CLI**: `serve`, `tasks`, `init` and `migrations` subcommands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
