//! Due-status classification.
//!
//! Pure mapping from a task's due date (and optional time-of-day) to an
//! urgency class with display text and color. The caller supplies `now`, so
//! the whole module is deterministic and directly testable.
//!
//! The boundaries are part of the product contract and covered by tests:
//! the "due soon" warning extends through 2 days out, and on the due day
//! itself the text switches from hours to minutes once less than one hour
//! remains.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const RED: &str = "#ef4444";
const AMBER: &str = "#f59e0b";
const GREEN: &str = "#10b981";
const GRAY: &str = "#6b7280";

const SECS_PER_DAY: i64 = 86_400;

/// Urgency class of a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The due instant has passed.
    Overdue,
    /// Due today, less than one hour left.
    Urgent,
    /// Due today or within the next 2 days.
    Warning,
    /// Due further out.
    Ok,
    /// No due date.
    Neutral,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Overdue | Severity::Urgent => RED,
            Severity::Warning => AMBER,
            Severity::Ok => GREEN,
            Severity::Neutral => GRAY,
        }
    }
}

/// Result of classifying a due date against a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueStatus {
    pub severity: Severity,
    /// Urgency text, e.g. "Overdue", "Due Today", "Due in 3 days". Empty
    /// when there is no due date.
    pub text: String,
    /// Day magnitude: days overdue, or days until due. `None` when there is
    /// no due date.
    pub days: Option<i64>,
    /// Compact date/time for card display, e.g. "14:30 • Today" or
    /// "19 Apr 2025".
    pub display: String,
}

impl DueStatus {
    pub fn color(&self) -> &'static str {
        self.severity.color()
    }

    fn neutral() -> Self {
        DueStatus {
            severity: Severity::Neutral,
            text: String::new(),
            days: None,
            display: String::new(),
        }
    }
}

/// Classifies a due date/time against `now`.
///
/// With a due time the comparison is instant-precise; with a bare date it
/// works at whole-day granularity. A due time without a due date carries no
/// meaning and classifies as neutral.
pub fn classify(due_date: Option<NaiveDate>, due_time: Option<NaiveTime>, now: NaiveDateTime) -> DueStatus {
    let due_date = match due_date {
        Some(d) => d,
        None => return DueStatus::neutral(),
    };

    let today = now.date();
    let formatted_date = due_date.format("%d %b %Y").to_string();

    if let Some(due_time) = due_time {
        let formatted_time = due_time.format("%H:%M").to_string();
        let due_instant = due_date.and_time(due_time);
        let remaining = due_instant - now;

        if remaining.num_seconds() < 0 {
            // Day magnitude counts any partial day late as a full one.
            let late_secs = -remaining.num_seconds();
            return DueStatus {
                severity: Severity::Overdue,
                text: "Overdue".to_string(),
                days: Some((late_secs + SECS_PER_DAY - 1) / SECS_PER_DAY),
                display: format!("{} • {}", formatted_time, formatted_date),
            };
        }

        if due_date == today {
            let secs_left = remaining.num_seconds();
            if secs_left < 3600 {
                return DueStatus {
                    severity: Severity::Urgent,
                    text: format!("Due in {} minutes!", secs_left / 60),
                    days: Some(0),
                    display: format!("{} • Today", formatted_time),
                };
            }
            return DueStatus {
                severity: Severity::Warning,
                text: format!("Due in {} hours", secs_left / 3600),
                days: Some(0),
                display: format!("{} • Today", formatted_time),
            };
        }

        let days_until = (due_date - today).num_days();
        let severity = if days_until <= 2 { Severity::Warning } else { Severity::Ok };
        return DueStatus {
            severity,
            text: format!("Due in {} days", days_until),
            days: Some(days_until),
            display: format!("{} • {}", formatted_time, formatted_date),
        };
    }

    let days_until = (due_date - today).num_days();
    if days_until < 0 {
        DueStatus {
            severity: Severity::Overdue,
            text: "Overdue".to_string(),
            days: Some(-days_until),
            display: formatted_date,
        }
    } else if days_until == 0 {
        DueStatus {
            severity: Severity::Warning,
            text: "Due Today".to_string(),
            days: Some(0),
            display: "Today".to_string(),
        }
    } else if days_until <= 2 {
        DueStatus {
            severity: Severity::Warning,
            text: format!("Due in {} days", days_until),
            days: Some(days_until),
            display: formatted_date,
        }
    } else {
        DueStatus {
            severity: Severity::Ok,
            text: format!("Due in {} days", days_until),
            days: Some(days_until),
            display: formatted_date,
        }
    }
}
