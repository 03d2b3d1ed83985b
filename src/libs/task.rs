//! Task and subtask records as stored and returned by the API.

use super::range::DateRange;
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Task urgency. Serialized as its integer code (0..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid priority {0}, expected 0 (Low), 1 (Medium), 2 (High) or 3 (Urgent)")]
pub struct InvalidPriority(pub i64);

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Urgent => 3,
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::High),
            3 => Ok(Priority::Urgent),
            other => Err(InvalidPriority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        };
        f.write_str(name)
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(*self)))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        Priority::try_from(code).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Assigned by storage; `0` until the task is inserted.
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub is_completed: bool,
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    pub fn new(title: &str, due_date: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        Task {
            id: 0,
            title: title.to_string(),
            description: None,
            due_date,
            created_at,
            updated_at: None,
            priority: Priority::default(),
            is_completed: false,
            sub_tasks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    pub id: i64,
    pub task_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub is_completed: bool,
}

impl SubTask {
    pub fn new(task_id: i64, title: &str, due_date: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        SubTask {
            id: 0,
            task_id,
            title: title.to_string(),
            description: None,
            due_date,
            created_at,
            updated_at: None,
            priority: Priority::default(),
            is_completed: false,
        }
    }
}

/// Row selection understood by the task repository.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    All,
    Completed(bool),
    Due(DateRange),
}
