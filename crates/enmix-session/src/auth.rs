//! Register, login, and logout over the session store.

use sha2::{Digest, Sha256};

use crate::store::SessionStore;
use crate::{Account, SessionError, SessionState};

/// SHA-256 hex digest of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Session-scoped account state with explicit lifecycle: loaded at open,
/// saved after every mutating operation.
#[derive(Debug)]
pub struct SessionManager {
    store: SessionStore,
    state: SessionState,
}

impl SessionManager {
    /// Load the state behind `store` and wrap it.
    pub fn open(store: SessionStore) -> Result<Self, SessionError> {
        let state = store.load()?;
        Ok(Self { store, state })
    }

    /// Register a new account and log it in.
    ///
    /// Rejects a password/confirmation mismatch and a duplicate email; both
    /// leave the registry untouched.
    pub fn register(
        &mut self,
        first_name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Account, SessionError> {
        if password != confirm {
            return Err(SessionError::PasswordMismatch);
        }
        if self.state.accounts.iter().any(|a| a.email == email) {
            return Err(SessionError::DuplicateEmail(email.to_string()));
        }

        let account = Account {
            first_name: first_name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
        };
        self.state.accounts.push(account.clone());
        // Registration doubles as login
        self.state.current = Some(account.email.clone());
        self.store.save(&self.state)?;
        Ok(account)
    }

    /// Log in with email and password.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Account, SessionError> {
        let hash = hash_password(password);
        let account = self
            .state
            .accounts
            .iter()
            .find(|a| a.email == email && a.password_hash == hash)
            .cloned()
            .ok_or(SessionError::InvalidCredentials)?;

        self.state.current = Some(account.email.clone());
        self.store.save(&self.state)?;
        Ok(account)
    }

    /// Clear the active session. Clearing an absent session is a no-op.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.state.current = None;
        self.store.save(&self.state)
    }

    /// The logged-in account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        self.state.current_account()
    }

    /// The full state (registry plus session).
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
