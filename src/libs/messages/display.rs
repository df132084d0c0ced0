//! Text rendering for [`Message`] variants.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskMoved(id, status) => format!("Task #{} moved to {}", id, status),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskDeletedWithSubtasks(id, count) => {
                format!("Task #{} deleted along with {} subtask(s)", id, count)
            }
            Message::TaskNotFoundWithId(id) => format!("Task #{} not found", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TaskListHeader => "📋 Tasks".to_string(),
            Message::BoardHeader => "🗂️ Board".to_string(),
            Message::SubtasksHeader(id) => format!("Subtasks of #{}", id),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmDeleteTaskWithSubtasks(title, count) => {
                format!("Delete task '{}' and its {} subtask(s)?", title, count)
            }
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::DueDateInPast => "Due date is in the past".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader => "📊 Task statistics".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::NothingToExport => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptOwnerName => "Your username (leave empty for shared tasks)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };
        write!(f, "{}", text)
    }
}
