//! Local snapshot persistence.
//!
//! A snapshot is the JSON form of [`PetState`](tamagotchi_types::PetState)
//! stored under a single well-known key ([`STATE_KEY`]). Stores are plain
//! key/value byte sinks; parsing and validation live in
//! [`lifecycle`](crate::lifecycle).
//!
//! - [`FileStore`] -- one `<key>.json` file per key in a data directory,
//!   written atomically via temp file + rename.
//! - [`MemoryStore`] -- in-process map, used by tests and ephemeral sessions.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::StoreError;

/// Key under which the pet snapshot is stored.
pub const STATE_KEY: &str = "tamagotchiState";

/// Durable local key/value storage for snapshots.
pub trait SnapshotStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &target)?;
        tracing::trace!(path = %target.display(), bytes = value.len(), "Snapshot written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key.to_owned(), value.to_owned());
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Number of stored keys. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |m| m.len())
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.entries.read().map_err(|_poison| StoreError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.entries.write().map_err(|_poison| StoreError::Poisoned)?;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
