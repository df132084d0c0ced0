//! Database layer.
//!
//! Persistence is a single SQLite file managed through `rusqlite`, with a
//! versioned migration system for schema evolution. The `tasks` module owns
//! the one domain table and the ordering invariants over it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kanri::db::tasks::Tasks;
//! use kanri::libs::task::{NewTask, Priority};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let id = tasks.insert(&NewTask::new("Review PR #123", Priority::High))?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite file in the platform
/// data directory and applies pending migrations.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes, tracks migration history, and provides
/// development-time migration management commands.
pub mod migrations;

/// Task storage and ordering engine.
///
/// CRUD over the tasks table plus the dense per-status position sequence
/// maintained across inserts, moves and deletes.
pub mod tasks;
