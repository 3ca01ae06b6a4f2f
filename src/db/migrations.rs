//! Database schema migration management and versioning.
//!
//! The schema version is the SQLite `user_version` header field: 0 for a
//! fresh file, then the version of the last applied migration. Migrations are
//! an ordered registry of versioned steps; every pending step runs inside a
//! single transaction together with the version bump, so a failure leaves
//! both the schema and the version where they were.
//!
//! ## Usage
//!
//! ```rust
//! use tasklite::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 1);
//! # Ok::<(), tasklite::db::error::StoreError>(())
//! ```

use super::error::StoreResult;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use rusqlite::{Connection, Transaction};

/// A single schema step.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number; steps run in ascending order
    version: u32,
    /// Human-readable name describing the step
    name: &'static str,
    /// Applies the change inside the migration transaction
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry of every schema step, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the task table.
        // AUTOINCREMENT keeps ids of deleted rows from ever being handed out again.
        self.add_migration(1, "create_tasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                    text TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        debug_assert!(self.migrations.last().map_or(true, |last| last.version < version));
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every step above the stored version and returns how many ran.
    ///
    /// Running it on an up-to-date database is a no-op, and so is running it
    /// on a database written by a newer build (its version is already past
    /// everything registered here).
    pub fn run_migrations(&self, conn: &mut Connection) -> StoreResult<usize> {
        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(0);
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in &pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e.into());
            }
            tx.pragma_update(None, "user_version", migration.version)?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;
        msg_info!(Message::AllMigrationsCompleted);

        Ok(pending.len())
    }

    fn get_current_version(&self, conn: &Connection) -> StoreResult<u32> {
        Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` up to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> StoreResult<()> {
    MigrationManager::new().run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> StoreResult<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> StoreResult<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
