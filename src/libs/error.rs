//! Error taxonomy of the task store.
//!
//! Three failure classes cross the store boundary: invalid input caught
//! before any mutation, references to tasks the caller cannot see, and
//! failures of the underlying SQLite storage. Command modules bubble these
//! into `anyhow::Result` and let the message layer render them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Input rejected before any state change. Carries one message per
    /// violated rule.
    #[error("invalid task: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The referenced task does not exist or is not visible to the caller.
    #[error("task {0} not found")]
    NotFound(i64),

    /// Underlying persistence failure; never retried silently.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
