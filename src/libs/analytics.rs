//! Aggregate task metrics for the stats dashboard.
//!
//! Pure counting over an owner-scoped snapshot; no side effects. The
//! due-soon metric uses a fixed 3-day inclusive window, which is a
//! different measure from the board's "Due This Week" filter and must stay
//! that way.

use crate::libs::task::{Priority, Status, Task};
use chrono::{Duration, NaiveDate};

/// Days ahead (inclusive) that count as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub to_do: usize,
    pub in_progress: usize,
    pub done: usize,
    pub blocked: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Snapshot metrics shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
    /// Tasks with a due date strictly before today. Works at whole-day
    /// granularity regardless of any due time.
    pub overdue: usize,
    /// Tasks due between today and today + 3 days, both ends inclusive.
    pub due_soon: usize,
}

/// Computes all dashboard counts from a task snapshot.
pub fn task_counts(tasks: &[Task], today: NaiveDate) -> TaskCounts {
    let mut counts = TaskCounts {
        total: tasks.len(),
        ..TaskCounts::default()
    };

    let due_soon_end = today + Duration::days(DUE_SOON_WINDOW_DAYS);

    for task in tasks {
        match task.status {
            Status::Todo => counts.by_status.to_do += 1,
            Status::InProgress => counts.by_status.in_progress += 1,
            Status::Done => counts.by_status.done += 1,
            Status::Blocked => counts.by_status.blocked += 1,
        }
        match task.priority {
            Priority::Critical => counts.by_priority.critical += 1,
            Priority::High => counts.by_priority.high += 1,
            Priority::Medium => counts.by_priority.medium += 1,
            Priority::Low => counts.by_priority.low += 1,
        }
        if let Some(due) = task.due_date {
            if due < today {
                counts.overdue += 1;
            }
            if due >= today && due <= due_soon_end {
                counts.due_soon += 1;
            }
        }
    }

    counts
}
