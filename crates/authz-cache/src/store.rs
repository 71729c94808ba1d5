//! On-disk snapshot storage

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::snapshot::Snapshot;

/// Errors reading or writing a snapshot file.
///
/// Store errors never abort a policy load: a read failure degrades to a
/// full recompile, and a write failure leaves the fresh in-memory index
/// in use. The loader reports them to the log and moves on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read or written.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The snapshot file exists but is not a valid snapshot document.
    #[error("snapshot file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// File-backed snapshot storage at an explicit path.
///
/// The location is configuration supplied by the caller; there is no
/// process-wide default path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file need not exist yet; it is created on the first
    /// [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot file currently exists at the store location.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and deserialize the stored snapshot.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Serialize and write a snapshot, replacing any previous one.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let serialized = serde_json::to_vec(snapshot)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authz_engine::AuthorizationIndex;
    use authz_policy::Policy;
    use tempfile::TempDir;

    fn snapshot(hash: &str) -> Snapshot {
        Snapshot::new(AuthorizationIndex::compile(&Policy::default(), hash).unwrap())
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("authz.json"));

        assert!(!store.exists());
        let saved = snapshot("abc");
        store.save(&saved).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), saved);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("missing.json"));

        assert!(matches!(store.load(), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_corrupt_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("authz.json");
        fs::write(&path, b"not json").unwrap();

        let store = SnapshotStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("authz.json"));

        store.save(&snapshot("first")).unwrap();
        store.save(&snapshot("second")).unwrap();

        assert_eq!(store.load().unwrap().index.source_hash, "second");
    }
}
