#[derive(Debug, Clone)]
pub enum Message {
    // === SERVER MESSAGES ===
    ServerStarting(String), // bind address
    ServerStopped,
    ShutdownSignalReceived,
    DatabaseOpened(String), // path

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    TasksNotFound,
    TasksHeader(String), // range label

    // === SUBTASK MESSAGES ===
    SubTaskCreated(i64),
    SubTaskUpdated(i64),
    SubTaskDeleted(i64),
    SubTaskNotFound(i64),
    ParentTaskMissing(i64),

    // === REQUEST MESSAGES ===
    RouteIdMismatch(i64, i64), // route, body
    InvalidCompletedFilter(String),
    InvalidRange(String),
    StorageFailure(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNothingToDelete,
    PromptServerHost,
    PromptServerPort,
    PromptDatabasePath,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32, u32), // current, latest
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
