//! # enmix-session: Accounts and Active Session
//!
//! A lightweight account registry with a single active session, persisted as
//! one local JSON document. There is no security model here: the registry is
//! a convenience for a demo deployment, not a user database. Passwords are
//! kept as SHA-256 digests purely so the document never contains them
//! verbatim; the check is still plain equality.
//!
//! State lives in an explicit [`SessionManager`] with a defined lifecycle:
//! loaded from the store at open, saved after every mutating operation,
//! discarded when dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod auth;
pub mod store;

pub use auth::SessionManager;
pub use store::SessionStore;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub first_name: String,
    /// Unique key of the registry
    pub email: String,
    /// SHA-256 hex digest of the password
    pub password_hash: String,
}

/// The persisted document: the account registry plus the active session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// All registered accounts
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Email of the logged-in account, if any
    #[serde(default)]
    pub current: Option<String>,
}

impl SessionState {
    /// The logged-in account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        let email = self.current.as_deref()?;
        self.accounts.iter().find(|a| a.email == email)
    }
}

/// Errors raised by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Registration with a password/confirmation mismatch
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Registration with an email that already exists
    #[error("email '{0}' is already registered")]
    DuplicateEmail(String),

    /// Login with an unknown email or wrong password
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Store I/O failure
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store document could not be parsed or written
    #[error("session store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
