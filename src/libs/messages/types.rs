#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskCompleted(String),   // text
    TaskReopened(String),    // text
    TaskNotFound(i64),       // id
    TasksCleared(usize),     // count
    NoCompletedTasks,
    NoTasksFound,
    TasksHeader(String),     // filter
    TaskFailed(String),      // error message
    ConfirmDeleteTask(String), // text
    ConfirmClearCompleted(usize),
    OperationCancelled,

    // === SESSION MESSAGES ===
    BackendConnected(String), // url
    BackendUnavailable,
    StatsLine { total: usize, completed: usize },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleStorage,
    PromptServerApiUrl,
    PromptPrimarySlot,
    PromptMirrorSlot,
}
