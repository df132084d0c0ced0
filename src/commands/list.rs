use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        filter::{self, DueFilter, FilterCriteria},
        messages::Message,
        task::{Priority, Status},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Filter flags shared by the list and board views.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Substring search over title, description and labels
    #[arg(short, long)]
    search: Option<String>,
    /// Only tasks in these statuses
    #[arg(long, value_enum)]
    status: Vec<Status>,
    /// Only tasks with these priorities
    #[arg(long, value_enum)]
    priority: Vec<Priority>,
    /// Only overdue tasks
    #[arg(long)]
    overdue: bool,
    /// Only tasks due today
    #[arg(long)]
    due_today: bool,
    /// Only tasks due between today and the end of the week
    #[arg(long)]
    due_week: bool,
    /// Only tasks due between today and the end of the month
    #[arg(long)]
    due_month: bool,
    /// Only tasks without a due date
    #[arg(long)]
    no_due_date: bool,
    /// Due-date range start (YYYY-MM-DD), inclusive; requires --to
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Due-date range end (YYYY-MM-DD), inclusive; requires --from
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn into_criteria(self) -> FilterCriteria {
        let bucket = if self.overdue {
            DueFilter::Overdue
        } else if self.due_today {
            DueFilter::DueToday
        } else if self.due_week {
            DueFilter::DueThisWeek
        } else if self.due_month {
            DueFilter::DueThisMonth
        } else {
            DueFilter::All
        };

        FilterCriteria {
            search: self.search,
            statuses: self.status,
            priorities: self.priority,
            due: DueFilter::resolve(self.no_due_date, self.from.zip(self.to), bucket),
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,
    /// List subtasks of the given task instead
    #[arg(long)]
    parent: Option<i64>,
    /// Print as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let owner = Config::read()?.owner;
    let mut store = Tasks::new()?;
    let now = Local::now().naive_local();

    if let Some(parent) = args.parent {
        let subtasks = store.subtasks(parent, owner.as_deref())?;
        if subtasks.is_empty() {
            msg_info!(Message::NoTasksFound);
            return Ok(());
        }
        msg_print!(Message::SubtasksHeader(parent), true);
        return View::tasks(&subtasks, now);
    }

    let tasks = store.fetch(owner.as_deref())?;
    let filtered = filter::apply(&tasks, &args.filters.into_criteria(), now.date());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TaskListHeader, true);
    View::tasks(&filtered, now)
}
