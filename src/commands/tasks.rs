use super::open_db;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::range::TaskRange;
use crate::libs::service::TaskService;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::{ArgAction, Args};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Only tasks due today, tomorrow or this week (Monday to Sunday)
    #[arg(short, long)]
    range: Option<TaskRange>,

    /// Filter by completion state; ignored when --range is given
    #[arg(short, long, action = ArgAction::Set, value_parser = clap::value_parser!(bool))]
    completed: Option<bool>,

    /// Path to the SQLite database file
    #[arg(long, env = "TODO_LIST_DB")]
    db: Option<PathBuf>,
}

pub fn cmd(args: TasksArgs) -> Result<()> {
    let config = Config::read()?;
    let db = open_db(args.db, &config)?;
    let clock = SystemClock;
    let tasks = TaskService::new(&db.conn, &clock).get_all(args.range, args.completed)?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    let label = args.range.map_or("all", TaskRange::label);
    msg_print!(Message::TasksHeader(label.to_string()), true);
    View::tasks(&tasks);

    Ok(())
}
