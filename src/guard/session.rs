//! Durable credential storage. The browser side of the dashboard keeps the
//! token pair in local storage; here it lives in a small JSON file. The gate
//! only ever sees the `SessionStore` trait so tests can substitute a fake.

use crate::guard::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Source of the persisted token pair.
pub trait SessionStore {
    /// Stored access token, or `None` if the caller never logged in.
    fn access_token(&self) -> Option<SecretString>;
    /// Companion refresh token; stored and cleared, never exercised here.
    fn refresh_token(&self) -> Option<SecretString>;
    /// Delete both tokens. Clearing an already empty store is `Ok`.
    fn clear(&self) -> Result<(), Error>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// File-backed token store, one JSON document with the two token keys.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // Missing or malformed files read as an empty session: the gate must
    // fail closed on a broken store, not error out.
    fn read(&self) -> SessionFile {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Persist a token pair, replacing whatever was stored before.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, access_token: &str, refresh_token: &str) -> Result<(), Error> {
        let session = SessionFile {
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        };

        fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;

        debug!("session written to {}", self.path.display());

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn access_token(&self) -> Option<SecretString> {
        self.read()
            .access_token
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    fn refresh_token(&self) -> Option<SecretString> {
        self.read()
            .refresh_token
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("session cleared from {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Store(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use secrecy::ExposeSecret;
    use uuid::Uuid;

    fn temp_session_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portero-session-test-{label}-{}", Uuid::new_v4()))
    }

    #[test]
    fn missing_file_reads_as_no_token() {
        let store = FileSessionStore::new(temp_session_path("missing"));

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn save_then_read_round_trips() -> Result<()> {
        let store = FileSessionStore::new(temp_session_path("round-trip"));

        store.save("access-abc", "refresh-xyz")?;

        let access = store.access_token().expect("access token");
        let refresh = store.refresh_token().expect("refresh token");
        assert_eq!(access.expose_secret(), "access-abc");
        assert_eq!(refresh.expose_secret(), "refresh-xyz");

        store.clear()?;
        Ok(())
    }

    #[test]
    fn malformed_file_reads_as_no_token() -> Result<()> {
        let path = temp_session_path("malformed");
        std::fs::write(&path, "not json at all")?;

        let store = FileSessionStore::new(&path);
        assert!(store.access_token().is_none());

        store.clear()?;
        Ok(())
    }

    #[test]
    fn empty_token_reads_as_none() -> Result<()> {
        let store = FileSessionStore::new(temp_session_path("empty"));

        store.save("", "")?;
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());

        store.clear()?;
        Ok(())
    }

    #[test]
    fn clear_is_idempotent() -> Result<()> {
        let store = FileSessionStore::new(temp_session_path("clear"));

        store.clear()?;

        store.save("access", "refresh")?;
        store.clear()?;
        assert!(store.access_token().is_none());

        store.clear()?;
        Ok(())
    }
}
