//! In-memory task filtering.
//!
//! A stateless predicate composition over a task snapshot: text search,
//! status and priority sets, and one due-date predicate, all combined by
//! logical AND. The input order is preserved.

use crate::libs::task::{Priority, Status, Task};
use chrono::{Datelike, Duration, NaiveDate};

/// Due-date predicate. At most one applies to a query; [`DueFilter::resolve`]
/// reproduces the precedence used when conflicting selections arrive from
/// the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueFilter {
    /// No date filtering.
    #[default]
    All,
    /// Tasks without a due date.
    NoDueDate,
    /// Inclusive custom date range.
    Range { start: NaiveDate, end: NaiveDate },
    /// Due strictly before today.
    Overdue,
    /// Due exactly today.
    DueToday,
    /// Due between today and the end of the ISO week (Sunday), inclusive.
    DueThisWeek,
    /// Due between today and the last day of the current month, inclusive.
    DueThisMonth,
}

impl DueFilter {
    /// Collapses possibly-conflicting selections into one predicate.
    ///
    /// Precedence: no-due-date, then a valid custom range, then the named
    /// bucket. An inverted range (start after end) is ignored and falls
    /// through to the bucket.
    pub fn resolve(no_due_date: bool, range: Option<(NaiveDate, NaiveDate)>, bucket: DueFilter) -> DueFilter {
        if no_due_date {
            return DueFilter::NoDueDate;
        }
        if let Some((start, end)) = range {
            if start <= end {
                return DueFilter::Range { start, end };
            }
        }
        bucket
    }

    /// Whether a task's due date passes this predicate.
    ///
    /// Every date-comparing variant rejects tasks without a due date; only
    /// `All` and `NoDueDate` can match them.
    fn matches(&self, due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
        match self {
            DueFilter::All => true,
            DueFilter::NoDueDate => due_date.is_none(),
            DueFilter::Range { start, end } => due_date.map(|d| d >= *start && d <= *end).unwrap_or(false),
            DueFilter::Overdue => due_date.map(|d| d < today).unwrap_or(false),
            DueFilter::DueToday => due_date.map(|d| d == today).unwrap_or(false),
            DueFilter::DueThisWeek => {
                let end_of_week = today + Duration::days(6 - today.weekday().num_days_from_monday() as i64);
                due_date.map(|d| d >= today && d <= end_of_week).unwrap_or(false)
            }
            DueFilter::DueThisMonth => {
                let end_of_month = last_day_of_month(today);
                due_date.map(|d| d >= today && d <= end_of_month).unwrap_or(false)
            }
        }
    }
}

/// Combined filter criteria. Empty sets and `None` search mean "no
/// restriction" for that dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
    pub due: DueFilter,
}

impl FilterCriteria {
    fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if let Some(query) = &self.search {
            if !search_matches(task, query) {
                return false;
            }
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&task.status) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority) {
            return false;
        }
        self.due.matches(task.due_date, today)
    }
}

/// Case-insensitive substring match against title, description or any label.
fn search_matches(task: &Task, query: &str) -> bool {
    let query = query.to_lowercase();
    task.title.to_lowercase().contains(&query)
        || task.description.to_lowercase().contains(&query)
        || task.labels.iter().any(|l| l.to_lowercase().contains(&query))
}

/// Applies the criteria to a snapshot, preserving input order.
pub fn apply(tasks: &[Task], criteria: &FilterCriteria, today: NaiveDate) -> Vec<Task> {
    tasks.iter().filter(|t| criteria.matches(t, today)).cloned().collect()
}

fn last_day_of_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    // First of the following month always exists; its predecessor is the
    // last day of the current one.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap().pred_opt().unwrap()
}
