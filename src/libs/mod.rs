//! Core library modules for the tasklite application.
//!
//! - **config**: `config.json` handling and the setup wizard
//! - **data_storage**: platform data directory resolution
//! - **messages**: user-facing text and output macros
//! - **screen**: the interactive sign-in and task screens
//! - **session**: the sign-in gate
//! - **task**: the task model and the on-screen task list
//! - **view**: table rendering

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod screen;
pub mod session;
pub mod task;
pub mod view;
