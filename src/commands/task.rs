//! One-shot task commands.
//!
//! Each invocation passes through the sign-in gate first. Missing
//! credentials are prompted for, so `--password` can stay out of shell history.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Email to sign in with
    #[arg(short, long, global = true)]
    pub(crate) email: Option<String>,

    /// Password to sign in with; prompted for when omitted
    #[arg(short, long, global = true)]
    pub(crate) password: Option<String>,

    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Show all tasks
    List,
    /// Add a task; blank text is ignored
    Add {
        #[arg(required = true)]
        text: String,
    },
    /// Delete a task by id
    Delete {
        #[arg(required = true)]
        id: i64,
    },
}

pub async fn cmd(task_args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let mut session = Session::new(config.credentials());

    let email = match task_args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = match task_args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .allow_empty_password(true)
            .interact()?,
    };

    if let Err(e) = session.attempt_sign_in(&email, &password) {
        msg_bail_anyhow!(e);
    }

    let db_file_name = config.db_file_name();
    let command = task_args.command;
    tokio::task::spawn_blocking(move || run(command, &db_file_name)).await?
}

fn run(command: TaskCommand, db_file_name: &str) -> Result<()> {
    let mut tasks = Tasks::with_file_name(db_file_name)?;

    match command {
        TaskCommand::List => View::tasks(&tasks.list_tasks()?),
        TaskCommand::Add { text } => match tasks.create_task(&text)? {
            Some(task) => msg_success!(Message::TaskCreated(task.id)),
            None => msg_info!(Message::TaskTextEmpty),
        },
        TaskCommand::Delete { id } => {
            if tasks.delete_task(id)? > 0 {
                msg_success!(Message::TaskDeleted(id));
            } else {
                msg_warning!(Message::TaskNotFoundWithId(id));
            }
        }
    }

    Ok(())
}
