//! On-disk snapshots of the two signed-in identities

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const AUTH_STORAGE_KEY: &str = "auth-storage";
pub const CREATOR_AUTH_STORAGE_KEY: &str = "creator-auth-storage";

const SNAPSHOT_VERSION: u32 = 0;

/// Envelope written around every snapshot: `{"state": .., "version": 0}`
#[derive(Debug, Serialize, Deserialize)]
struct Persisted<S> {
    state: S,
    #[serde(default)]
    version: u32,
}

/// JSON files under one directory, one per key
#[derive(Clone, Debug)]
pub struct SessionStorage {
    dir: PathBuf,
}

impl SessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a snapshot back. A missing file is `Ok(None)`.
    pub fn load<S: DeserializeOwned>(&self, key: &str) -> Result<Option<S>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let persisted: Persisted<S> = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        if persisted.version != SNAPSHOT_VERSION {
            tracing::warn!(key, version = persisted.version, "Snapshot version differs, reading anyway");
        }
        Ok(Some(persisted.state))
    }

    pub fn save<S: Serialize>(&self, key: &str, state: &S) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let content = serde_json::to_string(&Persisted {
            state,
            version: SNAPSHOT_VERSION,
        })?;
        fs::write(self.path(key), content)?;
        tracing::debug!(key, "Snapshot saved");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn missing_file_is_a_fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path());
        let loaded: Option<Value> = storage.load(AUTH_STORAGE_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn writes_the_state_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path().join("nested"));
        storage
            .save(AUTH_STORAGE_KEY, &json!({"user": null, "isAuthenticated": false}))
            .unwrap();

        let raw = fs::read_to_string(dir.path().join("nested/auth-storage.json")).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["isAuthenticated"], false);

        let back: Option<Value> = storage.load(AUTH_STORAGE_KEY).unwrap();
        assert_eq!(back.unwrap()["isAuthenticated"], false);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("creator-auth-storage.json"), "{not json").unwrap();
        let storage = SessionStorage::new(dir.path());
        let loaded: Result<Option<Value>> = storage.load(CREATOR_AUTH_STORAGE_KEY);
        assert!(loaded.is_err());
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path());
        storage.save(AUTH_STORAGE_KEY, &json!({})).unwrap();
        storage.remove(AUTH_STORAGE_KEY).unwrap();
        storage.remove(AUTH_STORAGE_KEY).unwrap();
        assert!(!dir.path().join("auth-storage.json").exists());
    }
}
