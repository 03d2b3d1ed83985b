use super::error::{RepositoryError, Result};
use crate::libs::clock::Clock;
use crate::libs::task::SubTask;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_SUB_TASK: &str = "INSERT INTO sub_tasks (task_id, title, description, due_date, created_at, updated_at, priority, is_completed)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_SUB_TASK: &str = "UPDATE sub_tasks SET title = ?2, description = ?3, is_completed = ?4, priority = ?5, updated_at = ?6 WHERE id = ?1";
const DELETE_SUB_TASK: &str = "DELETE FROM sub_tasks WHERE id = ?1";
const SELECT_SUB_TASKS: &str =
    "SELECT id, task_id, title, description, due_date, created_at, updated_at, priority, is_completed FROM sub_tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_TASK_ID: &str = "WHERE task_id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

pub struct SubTasks<'a> {
    conn: &'a Connection,
    clock: &'a dyn Clock,
}

impl<'a> SubTasks<'a> {
    pub fn new(conn: &'a Connection, clock: &'a dyn Clock) -> Self {
        SubTasks { conn, clock }
    }

    /// Subtasks owned by `task_id`, in insertion order. Unknown, zero or
    /// negative ids simply match nothing.
    pub fn get_all_by_task_id(&self, task_id: i64) -> Result<Vec<SubTask>> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_SUB_TASKS, WHERE_TASK_ID, ORDER_BY_ID))?;
        let sub_tasks = stmt.query_map(params![task_id], sub_task_from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sub_tasks)
    }

    /// Subtasks of every task selected by `task_filter`, a `WHERE` clause over
    /// `tasks` (or empty for all tasks), in insertion order.
    pub(crate) fn get_all_for_tasks(&self, task_filter: &str, params: &[Value]) -> Result<Vec<SubTask>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE task_id IN (SELECT id FROM tasks {}) {}",
            SELECT_SUB_TASKS, task_filter, ORDER_BY_ID
        ))?;
        let sub_tasks = stmt
            .query_map(params_from_iter(params.iter()), sub_task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sub_tasks)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<SubTask>> {
        let sub_task = self
            .conn
            .query_row(&format!("{} {}", SELECT_SUB_TASKS, WHERE_ID), params![id], sub_task_from_row)
            .optional()?;

        Ok(sub_task)
    }

    /// Stores `sub_task` as given (including its `created_at`) and returns it with its new id.
    pub fn insert(&self, sub_task: &SubTask) -> Result<SubTask> {
        self.conn.execute(
            INSERT_SUB_TASK,
            params![
                sub_task.task_id,
                sub_task.title,
                sub_task.description,
                sub_task.due_date,
                sub_task.created_at,
                sub_task.updated_at,
                sub_task.priority,
                sub_task.is_completed
            ],
        )?;

        Ok(SubTask {
            id: self.conn.last_insert_rowid(),
            ..sub_task.clone()
        })
    }

    /// Overwrites title, description, completion and priority, and stamps
    /// `updated_at` with the clock. `task_id`, `due_date` and `created_at`
    /// are left as stored.
    pub fn update(&self, sub_task: &SubTask) -> Result<SubTask> {
        let not_found = || RepositoryError::NotFound {
            entity: "SubTask",
            id: sub_task.id,
        };

        let affected = self.conn.execute(
            UPDATE_SUB_TASK,
            params![
                sub_task.id,
                sub_task.title,
                sub_task.description,
                sub_task.is_completed,
                sub_task.priority,
                self.clock.now()
            ],
        )?;
        if affected == 0 {
            return Err(not_found());
        }

        self.get_by_id(sub_task.id)?.ok_or_else(not_found)
    }

    /// Returns the deleted id, or `None` when no row matched.
    pub fn delete(&self, id: i64) -> Result<Option<i64>> {
        let affected = self.conn.execute(DELETE_SUB_TASK, params![id])?;
        Ok((affected > 0).then_some(id))
    }
}

fn sub_task_from_row(row: &Row<'_>) -> rusqlite::Result<SubTask> {
    Ok(SubTask {
        id: row.get(0)?,
        task_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        due_date: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
        priority: row.get(7)?,
        is_completed: row.get(8)?,
    })
}
