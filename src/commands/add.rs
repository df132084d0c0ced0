use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{NewTask, Priority, Status},
        validation,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Board column the task starts in
    #[arg(short, long, value_enum, default_value = "todo")]
    status: Status,
    /// Priority level
    #[arg(short, long, value_enum, default_value = "medium")]
    priority: Priority,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<NaiveDate>,
    /// Due time (HH:MM), only meaningful together with --due
    #[arg(long, value_parser = parse_due_time)]
    time: Option<NaiveTime>,
    /// Comma-separated labels
    #[arg(short, long, default_value = "")]
    labels: String,
    /// Parent task id (creates a subtask)
    #[arg(long)]
    parent: Option<i64>,
    /// Owner override; defaults to the configured identity
    #[arg(long)]
    owner: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let owner = args.owner.or(Config::read()?.owner);

    // Past due dates are legal; the board will show the task as overdue.
    if validation::due_date_in_past(args.due, Local::now().date_naive()) {
        msg_warning!(Message::DueDateInPast);
    }

    let task = NewTask {
        title: args.title,
        description: args.description,
        status: args.status,
        priority: args.priority,
        due_date: args.due,
        due_time: args.time,
        labels: args.labels,
        parent_id: args.parent,
        owner,
    };

    let id = Tasks::new()?.insert(&task)?;
    msg_success!(Message::TaskCreated(id));
    Ok(())
}

pub(crate) fn parse_due_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| format!("'{}' is not a valid HH:MM time", s))
}
