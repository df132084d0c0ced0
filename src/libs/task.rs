//! Core task types shared across the store, the pure engines and the views.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kanban column a task lives in.
///
/// Every task belongs to exactly one status partition; the `position`
/// column is dense (1..N) within each partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Status {
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
    #[serde(rename = "Blocked")]
    Blocked,
}

impl Status {
    /// Ordering used for flat task listings.
    pub const LIST_ORDER: [Status; 4] = [Status::Todo, Status::InProgress, Status::Blocked, Status::Done];

    /// Column ordering of the Kanban board view.
    pub const BOARD_ORDER: [Status; 4] = [Status::Blocked, Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
            Status::Blocked => "Blocked",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "To Do" => Some(Status::Todo),
            "In Progress" => Some(Status::InProgress),
            "Done" => Some(Status::Done),
            "Blocked" => Some(Status::Blocked),
            _ => None,
        }
    }

    /// Accent color of the column header.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Todo => "#3b82f6",
            Status::InProgress => "#f59e0b",
            Status::Done => "#10b981",
            Status::Blocked => "#ef4444",
        }
    }

    /// Rank within [`Status::LIST_ORDER`], used as the primary list sort key.
    pub fn list_rank(&self) -> usize {
        Self::LIST_ORDER.iter().position(|s| s == self).unwrap_or(Self::LIST_ORDER.len())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Critical, Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn parse(s: &str) -> Option<Priority> {
        match s {
            "Critical" => Some(Priority::Critical),
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Priority::Critical => "#ef4444",
            Priority::High => "#f59e0b",
            Priority::Medium => "#10b981",
            Priority::Low => "#6b7280",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task row as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub labels: Vec<String>,
    pub position: i64,
    pub parent_id: Option<i64>,
    pub owner: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,
}

impl Task {
    /// Combined due instant used to sort tasks within a status group.
    ///
    /// A bare date sorts at midnight, so date-only tasks come before timed
    /// tasks due the same day. Tasks with no due date return `None` and
    /// sort last.
    pub fn due_sort_key(&self) -> Option<NaiveDateTime> {
        self.due_date
            .map(|d| d.and_time(self.due_time.unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap())))
    }

    /// Labels as the comma-joined form stored in the `labels` column.
    pub fn labels_csv(&self) -> String {
        self.labels.join(",")
    }
}

/// Input for creating a task. Labels arrive as the raw comma-separated
/// user string and are normalized by the store before insertion.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub labels: String,
    pub parent_id: Option<i64>,
    pub owner: Option<String>,
}

impl NewTask {
    pub fn new(title: &str, priority: Priority) -> Self {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            status: Status::Todo,
            priority,
            due_date: None,
            due_time: None,
            labels: String::new(),
            parent_id: None,
            owner: None,
        }
    }
}

/// Full replacement of a task's editable fields.
///
/// `position` is deliberately absent: a status change routes through the
/// transition logic of the store, everything else leaves ordering untouched.
#[derive(Debug, Clone)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub labels: String,
}

impl TaskPatch {
    /// Patch pre-filled from the current row, for edit flows that override
    /// only some fields.
    pub fn from_task(task: &Task) -> Self {
        TaskPatch {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            due_time: task.due_time,
            labels: task.labels_csv(),
        }
    }
}
