//! Sign-in gate guarding access to the task screen.
//!
//! The gate compares a submitted email/password pair against one valid pair
//! by plain byte equality. There is no hashing, lockout or server round-trip;
//! the valid pair is the embedded default unless `config.json` overrides it.
//!
//! ```rust
//! use tasklite::libs::session::{Credentials, Session};
//!
//! let mut session = Session::new(Credentials::default());
//! assert!(session.attempt_sign_in("someone@example.com", "guess").is_err());
//! assert!(!session.is_signed_in());
//! ```

use crate::libs::messages::Message;
use crate::msg_debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EMAIL: &str = "usuario@ejemplo.com";
pub const DEFAULT_PASSWORD: &str = "password123";

/// Errors produced by the sign-in gate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{}", Message::InvalidCredentials)]
    InvalidCredentials,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.email.as_bytes() == email.as_bytes() && self.password.as_bytes() == password.as_bytes()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL, DEFAULT_PASSWORD)
    }
}

/// Signed-in state for one run of the application.
///
/// Starts signed out and is never persisted; screens receive it by reference
/// instead of reading a global flag.
#[derive(Debug, Clone)]
pub struct Session {
    credentials: Credentials,
    signed_in: bool,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            signed_in: false,
        }
    }

    /// Checks the pair once. A failed attempt leaves the current state untouched.
    pub fn attempt_sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        if !self.credentials.matches(email, password) {
            msg_debug!(Message::SignInRejected(email.to_string()));
            return Err(AuthError::InvalidCredentials);
        }
        self.signed_in = true;
        msg_debug!(Message::SignInAccepted(email.to_string()));
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.signed_in = false;
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_exact() {
        let credentials = Credentials::default();
        assert!(credentials.matches(DEFAULT_EMAIL, DEFAULT_PASSWORD));
        assert!(!credentials.matches("Usuario@ejemplo.com", DEFAULT_PASSWORD));
        assert!(!credentials.matches(" usuario@ejemplo.com", DEFAULT_PASSWORD));
        assert!(!credentials.matches(DEFAULT_EMAIL, "password123 "));
    }

    #[test]
    fn sign_out_is_unconditional() {
        let mut session = Session::default();
        session.sign_out();
        assert!(!session.is_signed_in());
    }
}
