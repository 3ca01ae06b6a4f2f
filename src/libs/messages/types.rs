#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SignInTitle,
    SignedIn,
    SignedOut,
    InvalidCredentials,
    SignInRequired,
    SignInAccepted(String), // email
    SignInRejected(String), // email
    PromptEmail,
    PromptPassword,

    // === TASK MESSAGES ===
    TaskScreenTitle,
    SqliteVersion(String),
    TaskCreated(i64),
    TaskStored(i64),
    TaskDeleteAffected(i64, usize), // id, rows
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskTextEmpty,
    TasksNotFound,
    TasksOpenFailed(String),
    TasksLoadFailed(String),
    TaskCreateFailed(String),
    TaskDeleteFailed(String),
    PromptTaskText,
    PromptSelectTaskToDelete,

    // === MENU MESSAGES ===
    PromptTaskMenu,
    MenuAddTask,
    MenuDeleteTask,
    MenuRefresh,
    MenuSignOut,
    MenuQuit,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleAuth,
    ConfigModuleStorage,
    PromptSelectModules,
    PromptAuthEmail,
    PromptAuthPassword,
    PromptDbFileName,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path
    DatabaseNotFound(String), // path
    MigrationsFound(usize), // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32), // version
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
}
