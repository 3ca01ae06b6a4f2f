//! Display implementation for tasklite application messages.
//!
//! Every user-facing string lives here, so the screens, commands and logs
//! all render the same wording for the same event.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SignInTitle => "Welcome".to_string(),
            Message::SignedIn => "Signed in".to_string(),
            Message::SignedOut => "Signed out".to_string(),
            Message::InvalidCredentials => "Incorrect email or password.".to_string(),
            Message::SignInRequired => "Sign in to manage your tasks".to_string(),
            Message::SignInAccepted(email) => format!("Sign-in accepted for {}", email),
            Message::SignInRejected(email) => format!("Sign-in rejected for {}", email),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),

            // === TASK MESSAGES ===
            Message::TaskScreenTitle => "Basic task system".to_string(),
            Message::SqliteVersion(version) => format!("SQLite {}", version),
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskStored(id) => format!("Task row {} inserted", id),
            Message::TaskDeleteAffected(id, rows) => format!("Delete of task #{} removed {} row(s)", id, rows),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task #{} not found", id),
            Message::TaskTextEmpty => "Task text is empty, nothing to add".to_string(),
            Message::TasksNotFound => "No tasks yet".to_string(),
            Message::TasksOpenFailed(e) => format!("Failed to open tasks: {}", e),
            Message::TasksLoadFailed(e) => format!("Failed to load tasks: {}", e),
            Message::TaskCreateFailed(e) => format!("Failed to add task: {}", e),
            Message::TaskDeleteFailed(e) => format!("Failed to delete task: {}", e),
            Message::PromptTaskText => "New task...".to_string(),
            Message::PromptSelectTaskToDelete => "Select task to delete".to_string(),

            // === MENU MESSAGES ===
            Message::PromptTaskMenu => "What next?".to_string(),
            Message::MenuAddTask => "Add task".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuRefresh => "Refresh".to_string(),
            Message::MenuSignOut => "Sign out".to_string(),
            Message::MenuQuit => "Quit".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleAuth => "Sign-in credentials".to_string(),
            Message::ConfigModuleStorage => "Task storage".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptAuthEmail => "Enter the email accepted at sign in".to_string(),
            Message::PromptAuthPassword => "Enter the password accepted at sign in".to_string(),
            Message::PromptDbFileName => "Enter the task database file name".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened: {}", path),
            Message::DatabaseNotFound(path) => format!("Database not found: {}", path),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_text_is_static() {
        assert_eq!(Message::InvalidCredentials.to_string(), "Incorrect email or password.");
    }

    #[test]
    fn parameterised_messages_interpolate() {
        assert_eq!(Message::TaskCreated(7).to_string(), "Task #7 created");
        assert_eq!(Message::RunningMigration(1, "create_tasks".into()).to_string(), "Running migration v1: create_tasks");
    }
}
