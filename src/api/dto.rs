//! Request bodies and their mapping onto domain records.
//!
//! Bodies are deserialized leniently (every field optional) so that
//! validation can report all missing or out-of-range fields at once
//! instead of failing on the first one.

use super::error::{FieldError, ValidationError};
use crate::libs::task::{Priority, SubTask, Task};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const TITLE_MAX_LEN: usize = 250;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    #[serde(default)]
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub priority: Option<i64>,
    #[serde(default)]
    pub is_completed: bool,
    pub sub_tasks: Option<Vec<SubTaskDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTaskDto {
    #[serde(default)]
    pub id: i64,
    pub task_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub priority: Option<i64>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Shared field checks; `prefix` is prepended to every reported field name.
struct Checker<'p> {
    prefix: &'p str,
    errors: Vec<FieldError>,
}

impl<'p> Checker<'p> {
    fn new(prefix: &'p str) -> Self {
        Checker {
            prefix,
            errors: Vec::new(),
        }
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(format!("{}{}", self.prefix, field), message));
    }

    /// Whitespace-only titles count as missing; otherwise the title is measured and kept as sent.
    fn title(&mut self, title: Option<&str>) -> String {
        let title = title.unwrap_or_default();
        if title.trim().is_empty() {
            self.fail("title", "Title is required");
        } else if title.chars().count() > TITLE_MAX_LEN {
            self.fail("title", format!("Title must be at most {} characters", TITLE_MAX_LEN));
        }
        title.to_string()
    }

    fn description(&mut self, description: Option<&str>) -> Option<String> {
        let description = description.filter(|d| !d.is_empty())?;
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            self.fail(
                "description",
                format!("Description must be at most {} characters", DESCRIPTION_MAX_LEN),
            );
        }
        Some(description.to_string())
    }

    fn priority(&mut self, priority: Option<i64>) -> Priority {
        match priority.map(Priority::try_from) {
            None => Priority::default(),
            Some(Ok(priority)) => priority,
            Some(Err(e)) => {
                self.fail("priority", e.to_string());
                Priority::default()
            }
        }
    }

    fn required(&mut self, field: &str, value: Option<DateTime<Utc>>) -> DateTime<Utc> {
        value.unwrap_or_else(|| {
            self.fail(field, format!("{} is required", field));
            DateTime::<Utc>::UNIX_EPOCH
        })
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

impl TaskDto {
    /// Validates the body and builds a [`Task`]. Nested subtasks are checked
    /// too; their errors are reported as `subTasks[i].<field>`.
    pub fn into_model(self) -> Result<Task, ValidationError> {
        let mut check = Checker::new("");
        let title = check.title(self.title.as_deref());
        let description = check.description(self.description.as_deref());
        let priority = check.priority(self.priority);
        let due_date = check.required("dueDate", self.due_date);
        let created_at = check.required("createdAt", self.created_at);

        let mut sub_tasks = Vec::new();
        for (i, dto) in self.sub_tasks.unwrap_or_default().into_iter().enumerate() {
            let prefix = format!("subTasks[{}].", i);
            match dto.build(&prefix) {
                Ok(sub_task) => sub_tasks.push(sub_task),
                Err(e) => check.errors.extend(e.errors),
            }
        }

        check.finish(Task {
            id: self.id,
            title,
            description,
            due_date,
            created_at,
            updated_at: self.updated_at,
            priority,
            is_completed: self.is_completed,
            sub_tasks,
        })
    }
}

impl SubTaskDto {
    /// Validates a standalone subtask body, which must name its parent task.
    pub fn into_model(self) -> Result<SubTask, ValidationError> {
        let task_id = self.task_id;
        let built = self.build("");
        let mut errors = built.as_ref().err().map(|e| e.errors.clone()).unwrap_or_default();
        if !matches!(task_id, Some(id) if id >= 1) {
            errors.push(FieldError::new("taskId", "TaskId must be a positive task id"));
        }

        if errors.is_empty() {
            built
        } else {
            Err(ValidationError::new(errors))
        }
    }

    fn build(self, prefix: &str) -> Result<SubTask, ValidationError> {
        let mut check = Checker::new(prefix);
        let title = check.title(self.title.as_deref());
        let description = check.description(self.description.as_deref());
        let priority = check.priority(self.priority);
        let due_date = check.required("dueDate", self.due_date);
        let created_at = check.required("createdAt", self.created_at);

        check.finish(SubTask {
            id: self.id,
            task_id: self.task_id.unwrap_or_default(),
            title,
            description,
            due_date,
            created_at,
            updated_at: self.updated_at,
            priority,
            is_completed: self.is_completed,
        })
    }
}

/// Parses `isCompleted` from a query string; case-insensitive, empty means no filter.
pub fn parse_completed(raw: Option<&str>) -> Result<Option<bool>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(value) if value.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(value) => Err(ValidationError::single(
            "isCompleted",
            crate::libs::messages::Message::InvalidCompletedFilter(value.to_string()).to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task_body() -> serde_json::Value {
        json!({
            "title": "Write report",
            "dueDate": "2025-07-16T10:00:00Z",
            "createdAt": "2025-07-15T08:00:00Z",
            "priority": 2
        })
    }

    fn fields(err: &ValidationError) -> Vec<&str> {
        err.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_task_maps_to_model() {
        let dto: TaskDto = serde_json::from_value(task_body()).unwrap();
        let task = dto.into_model().unwrap();

        assert_eq!(task.id, 0);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.is_completed);
        assert!(task.description.is_none());
        assert!(task.sub_tasks.is_empty());
    }

    #[test]
    fn empty_body_reports_every_missing_field() {
        let dto: TaskDto = serde_json::from_value(json!({})).unwrap();
        let err = dto.into_model().unwrap_err();

        assert_eq!(fields(&err), vec!["title", "dueDate", "createdAt"]);
    }

    #[test]
    fn title_and_description_lengths_are_bounded() {
        let mut body = task_body();
        body["title"] = json!("x".repeat(TITLE_MAX_LEN + 1));
        body["description"] = json!("y".repeat(DESCRIPTION_MAX_LEN + 1));
        body["priority"] = json!(9);
        let dto: TaskDto = serde_json::from_value(body).unwrap();

        let err = dto.into_model().unwrap_err();
        assert_eq!(fields(&err), vec!["title", "description", "priority"]);
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let mut body = task_body();
        body["title"] = json!("   ");
        let dto: TaskDto = serde_json::from_value(body).unwrap();

        assert_eq!(fields(&dto.into_model().unwrap_err()), vec!["title"]);
    }

    #[test]
    fn title_is_kept_as_sent() {
        let mut body = task_body();
        body["title"] = json!("  Buy milk ");
        let dto: TaskDto = serde_json::from_value(body).unwrap();

        assert_eq!(dto.into_model().unwrap().title, "  Buy milk ");
    }

    #[test]
    fn padded_title_counts_toward_length_limit() {
        let mut body = task_body();
        body["title"] = json!(format!("  Buy milk{}", " ".repeat(300)));
        let dto: TaskDto = serde_json::from_value(body).unwrap();

        assert_eq!(fields(&dto.into_model().unwrap_err()), vec!["title"]);
    }

    #[test]
    fn empty_description_becomes_none() {
        let mut body = task_body();
        body["description"] = json!("");
        let dto: TaskDto = serde_json::from_value(body).unwrap();

        assert!(dto.into_model().unwrap().description.is_none());
    }

    #[test]
    fn nested_sub_task_errors_are_prefixed() {
        let mut body = task_body();
        body["subTasks"] = json!([
            { "title": "ok", "dueDate": "2025-07-16T10:00:00Z", "createdAt": "2025-07-15T08:00:00Z" },
            { "title": "", "dueDate": "2025-07-16T10:00:00Z" }
        ]);
        let dto: TaskDto = serde_json::from_value(body).unwrap();

        let err = dto.into_model().unwrap_err();
        assert_eq!(fields(&err), vec!["subTasks[1].title", "subTasks[1].createdAt"]);
    }

    #[test]
    fn standalone_sub_task_needs_positive_task_id() {
        let body = json!({
            "title": "step",
            "dueDate": "2025-07-16T10:00:00Z",
            "createdAt": "2025-07-15T08:00:00Z",
            "taskId": 0
        });
        let dto: SubTaskDto = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(fields(&dto.into_model().unwrap_err()), vec!["taskId"]);

        let mut body = body;
        body["taskId"] = json!(3);
        let dto: SubTaskDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.into_model().unwrap().task_id, 3);
    }

    #[test]
    fn completed_filter_parsing() {
        assert_eq!(parse_completed(None).unwrap(), None);
        assert_eq!(parse_completed(Some("")).unwrap(), None);
        assert_eq!(parse_completed(Some("TRUE")).unwrap(), Some(true));
        assert_eq!(parse_completed(Some("False")).unwrap(), Some(false));

        let err = parse_completed(Some("yes")).unwrap_err();
        assert_eq!(fields(&err), vec!["isCompleted"]);
    }
}
