use super::task::Task;
use crate::db::migrations::AppliedMigration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a terminal table; subtasks are listed under their task.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "PRIORITY", "DONE", "SUBTASKS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.due_date.format("%Y-%m-%d %H:%M"),
                task.priority,
                if task.is_completed { "yes" } else { "" },
                task.sub_tasks.len()
            ]);
            for sub_task in &task.sub_tasks {
                table.add_row(row![
                    "",
                    format!("  └ {}", sub_task.title),
                    sub_task.due_date.format("%Y-%m-%d %H:%M"),
                    sub_task.priority,
                    if sub_task.is_completed { "yes" } else { "" },
                    ""
                ]);
            }
        }
        table.printstd();
    }

    pub fn migrations(history: &[AppliedMigration]) {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for migration in history {
            table.add_row(row![format!("v{}", migration.version), migration.name, migration.applied_at]);
        }
        table.printstd();
    }
}
