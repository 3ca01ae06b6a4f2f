use super::error::StoreResult;
use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// An open, migrated database handle.
///
/// Every constructor brings the schema up to date before returning, so no
/// query can run against an uninitialized file. `open_existing` hands out a
/// bare connection for inspection instead.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `file_name` inside the platform data directory.
    pub fn with_file_name(file_name: &str) -> StoreResult<Db> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> StoreResult<Db> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Self::prepare(conn)
    }

    pub fn open_in_memory() -> StoreResult<Db> {
        Self::prepare(Connection::open_in_memory()?)
    }

    /// Opens an existing database file without touching its schema.
    ///
    /// Returns `Ok(None)` when `path` does not exist; the file is never created.
    pub fn open_existing(path: impl AsRef<Path>) -> StoreResult<Option<Connection>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Ok(None);
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Ok(Some(Connection::open_with_flags(path, flags)?))
    }

    fn prepare(mut conn: Connection) -> StoreResult<Db> {
        // In-memory databases answer "memory" and keep their journal mode
        let _mode: String = conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
