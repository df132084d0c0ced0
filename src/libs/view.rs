//! Terminal table rendering for tasks, the board and the stats dashboard.

use crate::libs::analytics::TaskCounts;
use crate::libs::due;
use crate::libs::task::{Status, Task};
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Flat task listing with due-status annotations.
    pub fn tasks(tasks: &[Task], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE", "LABELS", "OWNER"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.status,
                task.priority,
                due_cell(task, now),
                task.labels.join(", "),
                task.owner.as_deref().unwrap_or("-"),
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Kanban board: one section per status column, in board order.
    pub fn board(tasks: &[Task], now: NaiveDateTime) -> Result<()> {
        for status in Status::BOARD_ORDER {
            let column: Vec<&Task> = tasks.iter().filter(|t| t.status == status).collect();
            println!("\n── {} ({}) ──", status, column.len());

            if column.is_empty() {
                println!("  (no tasks)");
                continue;
            }

            let mut table = Table::new();
            table.add_row(row!["ID", "TITLE", "PRIORITY", "DUE", "LABELS"]);
            for task in column {
                table.add_row(row![
                    task.id.unwrap_or(0),
                    card_title(task),
                    task.priority,
                    due_cell(task, now),
                    task.labels.join(", "),
                ]);
            }
            table.printstd();
        }

        Ok(())
    }

    /// Stats dashboard tables.
    pub fn summary(counts: &TaskCounts) -> Result<()> {
        let mut overview = Table::new();
        overview.add_row(row!["TOTAL", "OVERDUE", "DUE SOON"]);
        overview.add_row(row![counts.total, counts.overdue, counts.due_soon]);
        overview.printstd();

        let mut by_status = Table::new();
        by_status.add_row(row!["TO DO", "IN PROGRESS", "DONE", "BLOCKED"]);
        by_status.add_row(row![
            counts.by_status.to_do,
            counts.by_status.in_progress,
            counts.by_status.done,
            counts.by_status.blocked,
        ]);
        by_status.printstd();

        let mut by_priority = Table::new();
        by_priority.add_row(row!["CRITICAL", "HIGH", "MEDIUM", "LOW"]);
        by_priority.add_row(row![
            counts.by_priority.critical,
            counts.by_priority.high,
            counts.by_priority.medium,
            counts.by_priority.low,
        ]);
        by_priority.printstd();

        Ok(())
    }
}

/// Due column text: compact date plus urgency, or "-" when unset.
fn due_cell(task: &Task, now: NaiveDateTime) -> String {
    let status = due::classify(task.due_date, task.due_time, now);
    if status.text.is_empty() {
        "-".to_string()
    } else {
        format!("{} ({})", status.display, status.text)
    }
}

/// Card title; subtasks are marked with their parent reference.
fn card_title(task: &Task) -> String {
    match task.parent_id {
        Some(parent) => format!("{} (sub of #{})", task.title, parent),
        None => task.title.clone(),
    }
}
