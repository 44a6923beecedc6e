/*!
 * Persistent translation cache.
 *
 * The store maps normalized source text to translated text and is the only
 * mutable shared state of a run. It is loaded once at startup, checkpointed
 * to disk every ten new entries, and saved again at the end of the run.
 * Persistence failures are never fatal: a missing or corrupt file loads as
 * an empty cache, and a failed save is logged and skipped.
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use parking_lot::RwLock;

/// Number of new entries between automatic checkpoint saves.
const CHECKPOINT_INTERVAL: usize = 10;

/// Persistent, append-safe mapping from normalized source text to
/// translated text, backed by a single human-diffable JSON file.
pub struct CacheStore {
    /// Path of the persisted cache file
    path: PathBuf,

    /// In-memory entries
    entries: RwLock<HashMap<String, String>>,
}

impl CacheStore {
    /// Create a store backed by the given file. The file is not read until
    /// [`load`](Self::load) is called.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Read the persisted mapping into memory. A missing or unreadable file
    /// yields an empty cache.
    pub fn load(&self) {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No cache file at {:?} ({}), starting empty", self.path, e);
                return;
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&content) {
            Ok(loaded) => {
                info!("Loaded {} cached translations from {:?}", loaded.len(), self.path);
                *self.entries.write() = loaded;
            }
            Err(e) => {
                warn!("Cache file {:?} is corrupt ({}), starting empty", self.path, e);
            }
        }
    }

    /// Get a cached translation for a normalized key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Insert a translation. Saves a checkpoint whenever the store size
    /// reaches a multiple of [`CHECKPOINT_INTERVAL`] after the insertion.
    pub fn put(&self, key: &str, translation: &str) {
        let len_after = {
            let mut entries = self.entries.write();
            entries.insert(key.to_string(), translation.to_string());
            entries.len()
        };

        if len_after % CHECKPOINT_INTERVAL == 0 {
            debug!("Cache reached {} entries, checkpointing", len_after);
            self.save();
        }
    }

    /// Serialize the full mapping to the persisted file, overwriting it.
    /// Failure is logged and does not roll back in-memory state.
    pub fn save(&self) {
        let snapshot = self.entries.read().clone();

        let serialized = match serde_json::to_string_pretty(&snapshot) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Failed to serialize translation cache: {}", e);
                return;
            }
        };

        match fs::write(&self.path, serialized) {
            Ok(()) => info!("Saved {} translations to {:?}", snapshot.len(), self.path),
            Err(e) => warn!("Failed to save translation cache to {:?}: {}", self.path, e),
        }
    }

    /// Snapshot of all entries, for the rebuild pass.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Remove all in-memory entries. The persisted file is untouched until
    /// the next save.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Path of the persisted cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
