use super::error::{RepositoryError, Result};
use super::sub_tasks::SubTasks;
use crate::libs::clock::Clock;
use crate::libs::range::TaskRange;
use crate::libs::task::{SubTask, Task, TaskFilter};
use crate::msg_debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::HashMap;

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, created_at, updated_at, priority, is_completed)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, is_completed = ?4, priority = ?5, updated_at = ?6 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const EXISTS_TASK: &str = "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, created_at, updated_at, priority, is_completed FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_COMPLETED: &str = "WHERE is_completed = ?1";
const WHERE_DUE_BETWEEN: &str = "WHERE date(due_date) BETWEEN ?1 AND ?2";
const ORDER_BY_ID: &str = "ORDER BY id";

pub struct Tasks<'a> {
    conn: &'a Connection,
    clock: &'a dyn Clock,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection, clock: &'a dyn Clock) -> Self {
        Tasks { conn, clock }
    }

    /// Tasks matching `filter`, each with its subtasks loaded.
    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        msg_debug!(format!("Fetching tasks with filter {:?}", filter));

        match filter {
            TaskFilter::All => self.load("", &[]),
            TaskFilter::Completed(done) => self.load(WHERE_COMPLETED, &[Value::Integer(i64::from(done))]),
            TaskFilter::Due(range) => self.load(
                WHERE_DUE_BETWEEN,
                &[Value::Text(range.start.to_string()), Value::Text(range.end.to_string())],
            ),
        }
    }

    /// All tasks, optionally narrowed to one completion state.
    pub fn get_all(&self, completed: Option<bool>) -> Result<Vec<Task>> {
        match completed {
            Some(done) => self.fetch(TaskFilter::Completed(done)),
            None => self.fetch(TaskFilter::All),
        }
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.load(WHERE_ID, &[Value::Integer(id)])?.pop())
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        let exists = self.conn.query_row(EXISTS_TASK, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    pub fn get_for_today(&self) -> Result<Vec<Task>> {
        self.get_for_range(TaskRange::Today)
    }

    pub fn get_for_tomorrow(&self) -> Result<Vec<Task>> {
        self.get_for_range(TaskRange::Tomorrow)
    }

    pub fn get_for_this_week(&self) -> Result<Vec<Task>> {
        self.get_for_range(TaskRange::Week)
    }

    /// Tasks whose due date falls in `range`, evaluated against the clock at call time.
    pub fn get_for_range(&self, range: TaskRange) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::Due(range.bounds(self.clock.now())))
    }

    /// Stores `task` and then each of its subtasks under the new task id.
    ///
    /// `created_at` is kept as supplied by the caller. Every row is a separate
    /// statement; a failing subtask leaves the task and earlier subtasks in place.
    pub fn insert(&self, task: &Task) -> Result<Task> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                task.due_date,
                task.created_at,
                task.updated_at,
                task.priority,
                task.is_completed
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        let sub_tasks = SubTasks::new(self.conn, self.clock);
        let mut stored = Vec::with_capacity(task.sub_tasks.len());
        for sub_task in &task.sub_tasks {
            stored.push(sub_tasks.insert(&SubTask {
                task_id: id,
                ..sub_task.clone()
            })?);
        }

        Ok(Task {
            id,
            sub_tasks: stored,
            ..task.clone()
        })
    }

    /// Overwrites title, description, completion and priority, and stamps
    /// `updated_at` with the clock. `due_date`, `created_at` and the subtask
    /// list are left as stored.
    pub fn update(&self, task: &Task) -> Result<Task> {
        let not_found = || RepositoryError::NotFound { entity: "Task", id: task.id };

        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.is_completed,
                task.priority,
                self.clock.now()
            ],
        )?;
        if affected == 0 {
            return Err(not_found());
        }

        self.get_by_id(task.id)?.ok_or_else(not_found)
    }

    /// Returns the deleted id, or `None` when no row matched. Subtasks go
    /// with their task through the foreign key cascade.
    pub fn delete(&self, id: i64) -> Result<Option<i64>> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok((affected > 0).then_some(id))
    }

    /// Runs `task_filter` against `tasks` and attaches subtasks selected by the
    /// same filter, so the statement size does not grow with the result.
    fn load(&self, task_filter: &str, params: &[Value]) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, task_filter, ORDER_BY_ID))?;
        let mut tasks = stmt
            .query_map(params_from_iter(params.iter()), task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut by_task: HashMap<i64, Vec<SubTask>> = HashMap::new();
        for sub_task in SubTasks::new(self.conn, self.clock).get_all_for_tasks(task_filter, params)? {
            by_task.entry(sub_task.task_id).or_default().push(sub_task);
        }

        for task in &mut tasks {
            task.sub_tasks = by_task.remove(&task.id).unwrap_or_default();
        }

        Ok(tasks)
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        priority: row.get(6)?,
        is_completed: row.get(7)?,
        sub_tasks: Vec::new(),
    })
}
