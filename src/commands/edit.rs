use super::add::parse_due_time;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{Priority, Status, Task, TaskPatch},
        validation,
    },
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id
    id: i64,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New board column
    #[arg(short, long, value_enum)]
    status: Option<Status>,
    /// New priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<NaiveDate>,
    /// New due time (HH:MM)
    #[arg(long, value_parser = parse_due_time)]
    time: Option<NaiveTime>,
    /// Remove the due date and time
    #[arg(long, conflicts_with_all = ["due", "time"])]
    clear_due: bool,
    /// Replacement comma-separated labels
    #[arg(short, long)]
    labels: Option<String>,
}

impl EditArgs {
    fn has_field_flags(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.due.is_some()
            || self.time.is_some()
            || self.clear_due
            || self.labels.is_some()
    }
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let owner = Config::read()?.owner;
    let mut store = Tasks::new()?;

    let task = match store.get_by_id(args.id, owner.as_deref())? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let patch = if args.has_field_flags() {
        patch_from_flags(&task, &args)
    } else {
        patch_interactive(&task)?
    };

    if patch.due_date != task.due_date && validation::due_date_in_past(patch.due_date, Local::now().date_naive()) {
        msg_warning!(Message::DueDateInPast);
    }

    store.update(args.id, owner.as_deref(), &patch)?;
    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}

fn patch_from_flags(task: &Task, args: &EditArgs) -> TaskPatch {
    let mut patch = TaskPatch::from_task(task);

    if let Some(title) = &args.title {
        patch.title = title.clone();
    }
    if let Some(description) = &args.description {
        patch.description = description.clone();
    }
    if let Some(status) = args.status {
        patch.status = status;
    }
    if let Some(priority) = args.priority {
        patch.priority = priority;
    }
    if args.clear_due {
        patch.due_date = None;
        patch.due_time = None;
    }
    if let Some(due) = args.due {
        patch.due_date = Some(due);
    }
    if let Some(time) = args.time {
        patch.due_time = Some(time);
    }
    if let Some(labels) = &args.labels {
        patch.labels = labels.clone();
    }

    patch
}

/// Prompt-driven edit with the current values pre-filled. Empty date/time
/// answers clear the corresponding field.
fn patch_interactive(task: &Task) -> Result<TaskPatch> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme).with_prompt("Title").default(task.title.clone()).interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .default(task.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let status_names: Vec<&str> = Status::LIST_ORDER.iter().map(|s| s.as_str()).collect();
    let status_idx = Select::with_theme(&theme)
        .with_prompt("Status")
        .items(&status_names)
        .default(Status::LIST_ORDER.iter().position(|s| *s == task.status).unwrap_or(0))
        .interact()?;

    let priority_names: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    let priority_idx = Select::with_theme(&theme)
        .with_prompt("Priority")
        .items(&priority_names)
        .default(Priority::ALL.iter().position(|p| *p == task.priority).unwrap_or(0))
        .interact()?;

    let due: String = Input::with_theme(&theme)
        .with_prompt("Due date (YYYY-MM-DD, empty for none)")
        .default(task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.is_empty() || NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok() {
                Ok(())
            } else {
                Err("Use the YYYY-MM-DD format")
            }
        })
        .interact_text()?;

    let time: String = Input::with_theme(&theme)
        .with_prompt("Due time (HH:MM, empty for none)")
        .default(task.due_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.is_empty() || NaiveTime::parse_from_str(input, "%H:%M").is_ok() {
                Ok(())
            } else {
                Err("Use the HH:MM format")
            }
        })
        .interact_text()?;

    let labels: String = Input::with_theme(&theme)
        .with_prompt("Labels (comma-separated)")
        .default(task.labels_csv())
        .allow_empty(true)
        .interact_text()?;

    Ok(TaskPatch {
        title,
        description,
        status: Status::LIST_ORDER[status_idx],
        priority: Priority::ALL[priority_idx],
        due_date: NaiveDate::parse_from_str(&due, "%Y-%m-%d").ok(),
        due_time: NaiveTime::parse_from_str(&time, "%H:%M").ok(),
        labels,
    })
}
