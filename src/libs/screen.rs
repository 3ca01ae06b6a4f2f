//! Interactive sign-in and task screens.
//!
//! The sign-in screen loops until the gate accepts a pair. The task screen
//! owns the database handle for as long as it is mounted and keeps the list
//! it last rendered, applying the rows returned by create/delete to it. A
//! failed storage call is reported and leaves that list on screen.

use crate::db::error::StoreResult;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::{Task, TaskList};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

/// How the task screen was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenExit {
    SignedOut,
    Quit,
}

/// Prompts for email and password until `session` accepts them.
pub fn sign_in(session: &mut Session) -> Result<()> {
    msg_print!(Message::SignInTitle, true);
    loop {
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?;
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .allow_empty_password(true)
            .interact()?;

        match session.attempt_sign_in(&email, &password) {
            Ok(()) => {
                msg_success!(Message::SignedIn);
                return Ok(());
            }
            Err(e) => msg_error!(e),
        }
    }
}

pub struct TaskScreen {
    store: Tasks,
    list: TaskList,
}

impl TaskScreen {
    pub fn mount(store: Tasks) -> Self {
        Self { store, list: TaskList::new() }
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    /// Reloads the list from storage. On failure the previous list is kept.
    pub fn refresh(&mut self) -> StoreResult<()> {
        let tasks = self.store.list_tasks()?;
        self.list.replace(tasks);
        Ok(())
    }

    pub fn add(&mut self, text: &str) -> StoreResult<Option<Task>> {
        let created = self.store.create_task(text)?;
        if let Some(task) = &created {
            self.list.push(task.clone());
        }
        Ok(created)
    }

    /// Deletes `id`, returning whether a row was removed from storage.
    pub fn delete(&mut self, id: i64) -> StoreResult<bool> {
        let affected = self.store.delete_task(id)?;
        self.list.remove(id);
        Ok(affected > 0)
    }

    /// Runs the menu loop until the user signs out or quits.
    pub fn run(&mut self, session: &mut Session) -> Result<ScreenExit> {
        if !session.is_signed_in() {
            msg_bail_anyhow!(Message::SignInRequired);
        }

        let sqlite_version = self.store.sqlite_version().ok();
        if let Err(e) = self.refresh() {
            msg_error!(Message::TasksLoadFailed(e.to_string()));
        }

        let menu = [
            Message::MenuAddTask,
            Message::MenuDeleteTask,
            Message::MenuRefresh,
            Message::MenuSignOut,
            Message::MenuQuit,
        ];

        loop {
            View::header(sqlite_version.as_deref());
            View::tasks(self.list.tasks());

            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskMenu.to_string())
                .items(&menu)
                .default(0)
                .interact()?;

            match &menu[choice] {
                Message::MenuAddTask => self.prompt_add()?,
                Message::MenuDeleteTask => self.prompt_delete()?,
                Message::MenuRefresh => {
                    if let Err(e) = self.refresh() {
                        msg_error!(Message::TasksLoadFailed(e.to_string()));
                    }
                }
                Message::MenuSignOut => {
                    session.sign_out();
                    msg_success!(Message::SignedOut);
                    return Ok(ScreenExit::SignedOut);
                }
                _ => return Ok(ScreenExit::Quit),
            }
        }
    }

    fn prompt_add(&mut self) -> Result<()> {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .allow_empty(true)
            .interact_text()?;

        match self.add(&text) {
            Ok(Some(task)) => msg_success!(Message::TaskCreated(task.id)),
            Ok(None) => {}
            Err(e) => msg_error!(Message::TaskCreateFailed(e.to_string())),
        }
        Ok(())
    }

    fn prompt_delete(&mut self) -> Result<()> {
        if self.list.is_empty() {
            msg_print!(Message::TasksNotFound);
            return Ok(());
        }

        let labels: Vec<String> = self.list.tasks().iter().map(|task| format!("#{} {}", task.id, task.text)).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectTaskToDelete.to_string())
            .items(&labels)
            .interact()?;
        let id = self.list.tasks()[selection].id;

        match self.delete(id) {
            Ok(true) => msg_success!(Message::TaskDeleted(id)),
            Ok(false) => msg_warning!(Message::TaskNotFoundWithId(id)),
            Err(e) => msg_error!(Message::TaskDeleteFailed(e.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> TaskScreen {
        TaskScreen::mount(Tasks::open_in_memory().unwrap())
    }

    #[test]
    fn list_follows_mutations_without_relisting() {
        let mut screen = screen();
        screen.refresh().unwrap();
        assert!(screen.tasks().is_empty());

        let milk = screen.add("Buy milk").unwrap().unwrap();
        let dog = screen.add("Walk dog").unwrap().unwrap();
        assert_eq!(screen.tasks(), &[milk.clone(), dog.clone()]);

        assert!(screen.delete(milk.id).unwrap());
        assert_eq!(screen.tasks(), &[dog]);
    }

    #[test]
    fn blank_add_changes_nothing() {
        let mut screen = screen();
        assert_eq!(screen.add("   ").unwrap(), None);
        assert!(screen.tasks().is_empty());
    }

    #[test]
    fn deleting_unknown_id_reports_false() {
        let mut screen = screen();
        assert!(!screen.delete(99).unwrap());
    }

    #[test]
    fn storage_failures_keep_the_rendered_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("tasks.db");
        let mut screen = TaskScreen::mount(Tasks::open(&db_path).unwrap());
        screen.add("Buy milk").unwrap();
        let rendered = screen.tasks().to_vec();

        rusqlite::Connection::open(&db_path).unwrap().execute_batch("DROP TABLE tasks").unwrap();

        assert!(screen.refresh().is_err());
        assert!(screen.add("x").is_err());
        assert!(screen.delete(1).is_err());
        assert_eq!(screen.tasks(), rendered.as_slice());
    }

    #[test]
    fn run_requires_a_signed_in_session() {
        let mut screen = screen();
        let mut session = Session::default();
        assert!(screen.run(&mut session).is_err());
    }
}
