//! Convenient macros for application messaging and logging.
//!
//! The macros switch between structured logging and plain console output:
//! when `TASKLITE_DEBUG` or `RUST_LOG` is set the message goes through
//! `tracing` (and `main` installs a subscriber), otherwise it is printed.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//! - **`msg_error!`**: Error messages with ❌ prefix, written to stderr
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//! - **`msg_bail_anyhow!`**: Return early with an `anyhow::Error`
//!
//! ```rust
//! use tasklite::{msg_error, msg_success};
//! use tasklite::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated(1));
//! msg_error!(Message::InvalidCredentials);
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode lookup.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled. The environment is read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKLITE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
