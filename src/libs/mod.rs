//! Core library modules for the todo list.
//!
//! ## Features
//!
//! - **Domain**: task and subtask records (`task`)
//! - **Queries**: today / tomorrow / this-week date buckets (`range`)
//! - **Services**: range routing and parent checks over the repositories (`service`)
//! - **Infrastructure**: clock, configuration, data directory, messaging
//! - **Presentation**: terminal tables for the CLI (`view`)

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod range;
pub mod service;
pub mod task;
pub mod view;
