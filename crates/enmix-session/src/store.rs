//! JSON-backed persistence for [`SessionState`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::{SessionError, SessionState};

/// Loads and saves the session document at a fixed path.
///
/// An absent file reads as the empty state, mirroring an absent key in the
/// key-value store this replaces.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the user data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("enmix").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state, defaulting to empty when the file does not exist.
    pub fn load(&self) -> Result<SessionState, SessionError> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Persist the state, creating parent directories as needed.
    pub fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
