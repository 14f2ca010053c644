//! Explicit session state threaded through API calls.
//!
//! The bearer token is held in a `Session` value passed to whoever needs
//! it rather than in process-global state. On disk it lives in the auth
//! directory, the CLI equivalent of the browser keeping the token in
//! local storage.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data_paths::DataPaths;
use crate::errors::CoreError;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }
}

fn session_path(data_paths: &DataPaths) -> PathBuf {
    data_paths.auth().join(SESSION_FILE)
}

/// Persist the session after a successful login
pub fn save_session(data_paths: &DataPaths, session: &Session) -> Result<()> {
    std::fs::create_dir_all(data_paths.auth())?;
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(session_path(data_paths), json)?;
    Ok(())
}

/// Load the persisted session, failing with an auth error if the
/// operator has not logged in
pub fn load_session(data_paths: &DataPaths) -> Result<Session, CoreError> {
    let path = session_path(data_paths);
    let json = std::fs::read_to_string(&path)
        .map_err(|_| CoreError::Auth("not logged in, run 'etfdesk login' first".to_string()))?;
    let session: Session = serde_json::from_str(&json).map_err(|e| {
        CoreError::Auth(format!("corrupt session file {}: {}", path.display(), e))
    })?;
    Ok(session)
}

/// Remove the persisted session (logout)
pub fn clear_session(data_paths: &DataPaths) -> Result<()> {
    let path = session_path(data_paths);
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_session_round_trip() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::new(dir.path());

        let session = Session::new("tok-123", "operator");
        save_session(&paths, &session).unwrap();

        let loaded = load_session(&paths).unwrap();
        assert_eq!(loaded.access_token, "tok-123");
        assert_eq!(loaded.username, "operator");
    }

    #[test]
    fn test_load_without_login_is_auth_error() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::new(dir.path());

        let err = load_session(&paths).unwrap_err();
        assert!(matches!(err, CoreError::Auth(_)));
        assert!(err.to_string().contains("not logged in"));
    }

    #[test]
    fn test_clear_session() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::new(dir.path());

        save_session(&paths, &Session::new("tok", "operator")).unwrap();
        clear_session(&paths).unwrap();
        assert!(load_session(&paths).is_err());
    }
}
