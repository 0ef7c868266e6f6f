//! Credential storage for the portal session
//!
//! The backend issues a short-lived access token and a longer-lived refresh
//! token. Both are opaque strings persisted under two fixed keys; no
//! structure is imposed on them beyond presence or absence.

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access";

/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Persistent store for the session credential pair
pub trait CredentialStore: Send + Sync {
    /// Currently stored access token, if any
    fn access_token(&self) -> CoreResult<Option<String>>;

    /// Currently stored refresh token, if any
    fn refresh_token(&self) -> CoreResult<Option<String>>;

    /// Replace the access token, leaving the refresh token untouched
    fn store_access(&self, token: &str) -> CoreResult<()>;

    /// Replace both tokens
    fn store_pair(&self, access: &str, refresh: &str) -> CoreResult<()>;

    /// Remove both tokens
    fn clear(&self) -> CoreResult<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh: Option<String>,
}

/// In-memory credential store for tests and short-lived tools
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<StoredCredentials>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store already holding a credential pair
    pub fn with_pair(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(StoredCredentials {
                access: Some(access.into()),
                refresh: Some(refresh.into()),
            }),
        }
    }

    fn read(&self) -> StoredCredentials {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write(&self, f: impl FnOnce(&mut StoredCredentials)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn access_token(&self) -> CoreResult<Option<String>> {
        Ok(self.read().access)
    }

    fn refresh_token(&self) -> CoreResult<Option<String>> {
        Ok(self.read().refresh)
    }

    fn store_access(&self, token: &str) -> CoreResult<()> {
        self.write(|c| c.access = Some(token.to_string()));
        Ok(())
    }

    fn store_pair(&self, access: &str, refresh: &str) -> CoreResult<()> {
        self.write(|c| {
            c.access = Some(access.to_string());
            c.refresh = Some(refresh.to_string());
        });
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        self.write(|c| *c = StoredCredentials::default());
        Ok(())
    }
}

/// Credential store backed by a small JSON document on disk
///
/// Reads the file on every get so separate handles observe each other's
/// writes. Suited to a single cooperative process; there is no cross-process
/// locking.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> CoreResult<StoredCredentials> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(StoredCredentials::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, credentials: &StoredCredentials) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec(credentials)?)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn access_token(&self) -> CoreResult<Option<String>> {
        Ok(self.load()?.access)
    }

    fn refresh_token(&self) -> CoreResult<Option<String>> {
        Ok(self.load()?.refresh)
    }

    fn store_access(&self, token: &str) -> CoreResult<()> {
        let mut credentials = self.load()?;
        credentials.access = Some(token.to_string());
        self.save(&credentials)
    }

    fn store_pair(&self, access: &str, refresh: &str) -> CoreResult<()> {
        self.save(&StoredCredentials {
            access: Some(access.to_string()),
            refresh: Some(refresh.to_string()),
        })
    }

    fn clear(&self) -> CoreResult<()> {
        self.save(&StoredCredentials::default())
    }
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub CredentialStore {}

        impl CredentialStore for CredentialStore {
            fn access_token(&self) -> CoreResult<Option<String>>;
            fn refresh_token(&self) -> CoreResult<Option<String>>;
            fn store_access(&self, token: &str) -> CoreResult<()>;
            fn store_pair(&self, access: &str, refresh: &str) -> CoreResult<()>;
            fn clear(&self) -> CoreResult<()>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.access_token().unwrap(), None);
        assert_eq!(store.refresh_token().unwrap(), None);

        store.store_pair("a1", "r1").unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("a1"));
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("r1"));
    }

    #[test]
    fn store_access_keeps_refresh() {
        let store = MemoryCredentialStore::with_pair("a1", "r1");
        store.store_access("a2").unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("a2"));
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("r1"));
    }

    #[test]
    fn clear_removes_both() {
        let store = MemoryCredentialStore::with_pair("a1", "r1");
        store.clear().unwrap();
        assert_eq!(store.access_token().unwrap(), None);
        assert_eq!(store.refresh_token().unwrap(), None);
    }

    #[test]
    fn file_store_persists_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let writer = FileCredentialStore::new(&path);
        writer.store_pair("a1", "r1").unwrap();

        let reader = FileCredentialStore::new(&path);
        assert_eq!(reader.access_token().unwrap().as_deref(), Some("a1"));
        assert_eq!(reader.refresh_token().unwrap().as_deref(), Some("r1"));

        writer.store_access("a2").unwrap();
        assert_eq!(reader.access_token().unwrap().as_deref(), Some("a2"));
    }

    #[test]
    fn on_disk_document_uses_the_fixed_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        FileCredentialStore::new(&path).store_pair("a1", "r1").unwrap();

        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc[ACCESS_TOKEN_KEY], "a1");
        assert_eq!(doc[REFRESH_TOKEN_KEY], "r1");
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("absent.json"));
        assert_eq!(store.access_token().unwrap(), None);
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested/dir/credentials.json"));
        store.store_pair("a1", "r1").unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("a1"));
    }

    #[test]
    fn mock_store_reports_configured_token() {
        let mut store = mock::MockCredentialStore::new();
        store
            .expect_access_token()
            .returning(|| Ok(Some("mocked".to_string())));
        assert_eq!(store.access_token().unwrap().as_deref(), Some("mocked"));
    }
}
