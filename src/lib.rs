//! # Tasklite
//!
//! A to-do list behind a sign-in gate, stored in a local SQLite file.
//!
//! ## Features
//!
//! - **Sign-in Gate**: one valid email/password pair, checked by exact comparison
//! - **Task Store**: create, list and delete tasks with migrated SQLite storage
//! - **Interactive Screens**: sign-in form and task list in the terminal
//! - **One-shot Commands**: scriptable `task list|add|delete`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklite::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
