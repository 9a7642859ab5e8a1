//! Session Store
//!
//! Durable persistence for the bearer token. Each app binary uses its own
//! namespace so a wallet login never leaks into the site admin and vice
//! versa. The token is a single trimmed line in a file under the platform
//! data directory, mirroring how the local database picks its path.

use std::fs;
use std::path::PathBuf;

/// Durable token storage for one app namespace
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store rooted at the platform data directory
    /// (`<data_dir>/novapay/<namespace>.token`)
    pub fn new(namespace: &str) -> Self {
        let mut dir = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        dir.push("novapay");
        Self::with_dir(dir, namespace)
    }

    /// Store rooted at an explicit directory. Tests point this at a temp
    /// directory so they never touch the real session.
    pub fn with_dir(dir: impl Into<PathBuf>, namespace: &str) -> Self {
        let mut path = dir.into();
        path.push(format!("{}.token", namespace));
        Self { path }
    }

    /// Read the persisted token. Absence is a valid result, not an error;
    /// unreadable or empty files also read as absent.
    pub fn read(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist a token, overwriting any previous value.
    pub fn write(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Remove the persisted token. Safe to call when nothing is stored.
    pub fn clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_dir(dir.path(), "wallet");
        (dir, store)
    }

    #[test]
    fn read_absent_is_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let (_dir, store) = temp_store();
        store.write("tok1").unwrap();
        assert_eq!(store.read(), Some("tok1".to_string()));
    }

    #[test]
    fn write_overwrites_previous_token() {
        let (_dir, store) = temp_store();
        store.write("tok1").unwrap();
        store.write("tok2").unwrap();
        assert_eq!(store.read(), Some("tok2".to_string()));
    }

    #[test]
    fn clear_is_idempotent() {
        let (_dir, store) = temp_store();
        store.write("tok1").unwrap();
        store.clear().unwrap();
        assert_eq!(store.read(), None);
        store.clear().unwrap();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn namespaces_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = SessionStore::with_dir(dir.path(), "wallet");
        let site = SessionStore::with_dir(dir.path(), "site");
        wallet.write("tok1").unwrap();
        assert_eq!(site.read(), None);
    }

    #[test]
    fn whitespace_only_file_reads_as_absent() {
        let (_dir, store) = temp_store();
        store.write("  \n").unwrap();
        assert_eq!(store.read(), None);
    }
}
