//! Service layer between the HTTP handlers (or CLI) and the repositories.
//!
//! Services take already-validated domain records. They route range requests
//! to the date-bucket queries and guard subtask creation against dangling
//! parent ids; everything else passes straight through to storage.

use crate::db::error::RepositoryError;
use crate::db::sub_tasks::SubTasks;
use crate::db::tasks::Tasks;
use crate::libs::clock::Clock;
use crate::libs::range::TaskRange;
use crate::libs::task::{SubTask, Task};
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A subtask referenced a task id with no matching row.
    #[error("task {0} does not exist")]
    MissingParentTask(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

pub struct TaskService<'a> {
    tasks: Tasks<'a>,
}

impl<'a> TaskService<'a> {
    pub fn new(conn: &'a Connection, clock: &'a dyn Clock) -> Self {
        TaskService {
            tasks: Tasks::new(conn, clock),
        }
    }

    /// Lists tasks. A range, when given, takes precedence and `completed` is ignored.
    pub fn get_all(&self, range: Option<TaskRange>, completed: Option<bool>) -> Result<Vec<Task>> {
        let tasks = match range {
            Some(TaskRange::Today) => self.tasks.get_for_today()?,
            Some(TaskRange::Tomorrow) => self.tasks.get_for_tomorrow()?,
            Some(TaskRange::Week) => self.tasks.get_for_this_week()?,
            None => self.tasks.get_all(completed)?,
        };

        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.tasks.get_by_id(id)?)
    }

    pub fn add(&self, task: &Task) -> Result<Task> {
        Ok(self.tasks.insert(task)?)
    }

    pub fn update(&self, task: &Task) -> Result<Task> {
        Ok(self.tasks.update(task)?)
    }

    pub fn delete(&self, id: i64) -> Result<Option<i64>> {
        Ok(self.tasks.delete(id)?)
    }
}

pub struct SubTaskService<'a> {
    sub_tasks: SubTasks<'a>,
    tasks: Tasks<'a>,
}

impl<'a> SubTaskService<'a> {
    pub fn new(conn: &'a Connection, clock: &'a dyn Clock) -> Self {
        SubTaskService {
            sub_tasks: SubTasks::new(conn, clock),
            tasks: Tasks::new(conn, clock),
        }
    }

    pub fn get_all_by_task_id(&self, task_id: i64) -> Result<Vec<SubTask>> {
        Ok(self.sub_tasks.get_all_by_task_id(task_id)?)
    }

    /// Stores a subtask under an existing task.
    pub fn add(&self, sub_task: &SubTask) -> Result<SubTask> {
        if !self.tasks.exists(sub_task.task_id)? {
            return Err(ServiceError::MissingParentTask(sub_task.task_id));
        }

        Ok(self.sub_tasks.insert(sub_task)?)
    }

    /// Updates the mutable fields of a subtask. The owning task never changes,
    /// so `sub_task.task_id` is not consulted.
    pub fn update(&self, sub_task: &SubTask) -> Result<SubTask> {
        Ok(self.sub_tasks.update(sub_task)?)
    }

    pub fn delete(&self, id: i64) -> Result<Option<i64>> {
        Ok(self.sub_tasks.delete(id)?)
    }
}
