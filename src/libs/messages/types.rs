/// All user-facing messages, grouped by feature area.
///
/// Keeping the text in one enum gives a single place to adjust wording and
/// keeps parameter usage type-checked. Rendering lives in
/// [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskMoved(i64, String),
    TaskDeleted(i64),
    TaskDeletedWithSubtasks(i64, usize),
    TaskNotFoundWithId(i64),
    NoTasksFound,
    TaskListHeader,
    BoardHeader,
    SubtasksHeader(i64),
    ConfirmDeleteTask(String),
    ConfirmDeleteTaskWithSubtasks(String, usize),
    OperationCancelled,
    DueDateInPast,

    // === STATS MESSAGES ===
    StatsHeader,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptOwnerName,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
