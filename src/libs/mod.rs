//! Core library modules for the kanri application.
//!
//! Serves as the main entry point for all kanri library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Model**: Typed tasks, statuses, priorities, validation
//! - **Pure Engines**: Due-status classification, filtering, analytics
//! - **User Interface**: Console rendering, data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kanri::db::tasks::Tasks;
//! use kanri::libs::task::{NewTask, Priority};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&NewTask::new("Implement feature", Priority::High))?;
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod config;
pub mod data_storage;
pub mod due;
pub mod error;
pub mod export;
pub mod filter;
pub mod messages;
pub mod task;
pub mod validation;
pub mod view;
