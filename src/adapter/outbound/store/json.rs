//! JSON file snapshot store.
//!
//! Writes a pretty-printed JSON array of `{"name", "availability"}` records.
//! Saves go through a temp file in the same directory followed by a rename,
//! so a crash mid-write leaves the previous file intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Snapshot;
use crate::error::{Error, Result};
use crate::port::outbound::store::SnapshotStore;

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Snapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot on disk, starting empty");
                return Ok(Snapshot::new());
            }
            Err(e) => return Err(Error::persistence(&self.path, e)),
        };

        serde_json::from_str(&content).map_err(|e| Error::persistence(&self.path, e))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json =
            serde_json::to_string_pretty(snapshot).map_err(|e| Error::persistence(&self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::persistence(&self.path, e))?;
        }

        let temp_path = self.temp_path();
        let cleanup_and_err = |e: std::io::Error| {
            let _ = fs::remove_file(&temp_path);
            Error::persistence(&self.path, e)
        };

        let mut file = fs::File::create(&temp_path).map_err(|e| Error::persistence(&self.path, e))?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), entries = snapshot.len(), "Snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SnapshotEntry;

    fn sample() -> Snapshot {
        Snapshot::from_entries(vec![
            SnapshotEntry::new("A", true),
            SnapshotEntry::new("B", false),
        ])
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("currentStatus.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("currentStatus.json"));

        store.save(&sample()).unwrap();

        assert_eq!(store.load().unwrap(), sample());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("state.json"));

        store.save(&sample()).unwrap();
        store.save(&Snapshot::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("nested/deeper/state.json"));

        store.save(&sample()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_file_format_is_pretty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("state.json"));
        store.save(&sample()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains("\"name\": \"A\""));
        assert!(content.contains("\"availability\": true"));
    }

    #[test]
    fn test_corrupt_file_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonSnapshotStore::new(&path);

        assert!(matches!(store.load(), Err(Error::Persistence { .. })));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let store = JsonSnapshotStore::new("/var/lib/restock/state.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/var/lib/restock/state.json.tmp")
        );
    }
}
