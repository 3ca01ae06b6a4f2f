//! Interactive session: sign-in screen, then the task screen.
//!
//! Signing out returns to the sign-in screen; the database handle is opened
//! each time the task screen mounts and dropped when it unmounts. A store that
//! fails to open is reported and the user is sent back to sign in to retry.

use crate::db::error::StoreResult;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::screen::{sign_in, ScreenExit, TaskScreen};
use crate::libs::session::Session;
use crate::msg_error;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    // Prompts block on stdin, keep them off the async workers
    tokio::task::spawn_blocking(move || run(config)).await?
}

fn run(config: Config) -> Result<()> {
    let mut session = Session::new(config.credentials());
    let db_file_name = config.db_file_name();

    loop {
        sign_in(&mut session)?;

        let Some(mut screen) = mount_screen(Tasks::with_file_name(&db_file_name), &mut session) else {
            continue;
        };
        match screen.run(&mut session)? {
            ScreenExit::SignedOut => continue,
            ScreenExit::Quit => return Ok(()),
        }
    }
}

/// Mounts the task screen on an opened store.
///
/// On failure the error is shown and the session is signed out, so the caller
/// goes back to the sign-in screen instead of ending the process.
fn mount_screen(opened: StoreResult<Tasks>, session: &mut Session) -> Option<TaskScreen> {
    match opened {
        Ok(store) => Some(TaskScreen::mount(store)),
        Err(e) => {
            msg_error!(Message::TasksOpenFailed(e.to_string()));
            session.sign_out();
            None
        }
    }
}
