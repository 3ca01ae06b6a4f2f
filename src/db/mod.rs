//! Database layer for the tasklite application.
//!
//! A single SQLite file holds the `tasks` table. Opening a handle applies any
//! pending schema migrations first, so callers never see a half-initialized
//! database.
//!
//! ## Usage
//!
//! ```rust
//! use tasklite::db::tasks::Tasks;
//!
//! let mut tasks = Tasks::open_in_memory()?;
//! let created = tasks.create_task("Buy milk")?.expect("non-blank text is stored");
//! assert_eq!(tasks.list_tasks()?, vec![created]);
//! # Ok::<(), tasklite::db::error::StoreError>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Storage error types shared by the whole layer.
pub mod error;

/// Versioned schema steps tracked in `PRAGMA user_version`.
pub mod migrations;

/// Task CRUD operations.
pub mod tasks;
