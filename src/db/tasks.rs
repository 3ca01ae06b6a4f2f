use super::db::Db;
use super::error::StoreResult;
use super::migrations::init_with_migrations;
use crate::libs::messages::Message;
use crate::libs::task::{is_blank, Task};
use crate::msg_debug;
use rusqlite::{params, Connection, Row};
use std::path::Path;

const INSERT_TASK: &str = "INSERT INTO tasks (text) VALUES (?1)";
const SELECT_TASKS: &str = "SELECT id, text FROM tasks ORDER BY id";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// CRUD over the `tasks` table.
///
/// Holding a `Tasks` means holding an initialized database: the handle is
/// built from a [`Db`], which migrates the schema on open. Dropping it
/// releases the connection.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn with_file_name(file_name: &str) -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::with_file_name(file_name)?))
    }

    pub fn open(path: impl AsRef<Path>) -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn open_in_memory() -> StoreResult<Tasks> {
        Ok(Self::from_db(Db::open_in_memory()?))
    }

    pub fn from_db(db: Db) -> Self {
        Tasks { conn: db.conn }
    }

    /// Re-runs pending migrations. Idempotent; a no-op on an initialized handle.
    pub fn initialize(&mut self) -> StoreResult<()> {
        init_with_migrations(&mut self.conn)
    }

    /// All tasks in id order.
    pub fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], Self::map_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Stores `text` as typed and returns the new row.
    ///
    /// Blank input (empty or whitespace only) is ignored and yields `Ok(None)`.
    pub fn create_task(&mut self, text: &str) -> StoreResult<Option<Task>> {
        if is_blank(text) {
            return Ok(None);
        }

        self.conn.execute(INSERT_TASK, params![text])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!(Message::TaskStored(id));

        Ok(Some(Task::new(id, text)))
    }

    /// Deletes the task with `id` and returns the number of rows removed.
    ///
    /// Unknown ids remove nothing and are not an error.
    pub fn delete_task(&mut self, id: i64) -> StoreResult<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        msg_debug!(Message::TaskDeleteAffected(id, affected));
        Ok(affected)
    }

    pub fn sqlite_version(&self) -> StoreResult<String> {
        Ok(self.conn.query_row("SELECT sqlite_version()", [], |row| row.get(0))?)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            text: row.get(1)?,
        })
    }
}
