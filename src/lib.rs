//! # Kanri - Kanban task management from the terminal
//!
//! A command-line Kanban board for tracking tasks with statuses,
//! priorities, due dates, labels and subtasks.
//!
//! ## Features
//!
//! - **Board Columns**: To Do, In Progress, Done and Blocked, with stable
//!   per-column ordering
//! - **Due Dates**: Urgency classification with day- and minute-level
//!   granularity
//! - **Filtering**: Text search, status/priority sets, due-date buckets
//! - **Subtasks**: One level of task nesting
//! - **Analytics**: Status, priority, overdue and due-soon counts
//! - **Data Export**: CSV and JSON snapshots
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kanri::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
