//! Persistence adapter: serialises the filesystem tree and session metadata
//! through an opaque [`BlobStore`], with debounced/coalesced saves and a
//! capped rotating backup chain.

use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::blob_store::BlobStore;
use crate::fs::{FsNode, FsState};
use crate::profile::Profile;

pub const KEY_FS: &str = "vshell:fs";
pub const KEY_MODE: &str = "vshell:mode";
pub const KEY_VERSION: &str = "vshell:version";
pub const BACKUP_PREFIX: &str = "vshell:backup:";
pub const MAX_BACKUPS: usize = 3;

pub const CURRENT_SCHEMA_VERSION: &str = "2";

const DEBOUNCE: Duration = Duration::from_millis(500);
const MAX_DEBOUNCE: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    root: FsNode,
    current_path: Vec<String>,
    mode: String,
    version: String,
    saved_at: chrono::DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("no saved filesystem blob")]
    NotFound,
    #[error("corrupt filesystem blob: {0}")]
    Corrupt(String),
}

/// Tracks the debounce/coalesce state for non-mutating saves. Mutating
/// commands (touch, mkdir, rm, rmdir, vi, output redirection) bypass this
/// and call [`PersistenceAdapter::save`] directly.
pub struct DebounceTimer {
    last_trigger: Option<Instant>,
    first_trigger: Option<Instant>,
    last_hash: Option<u64>,
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self { last_trigger: None, first_trigger: None, last_hash: None }
    }
}

impl DebounceTimer {
    /// Record a save request at `now` with the given content hash. Returns
    /// `true` if this request is a no-op duplicate of the last one.
    pub fn note_trigger(&mut self, now: Instant, content_hash: u64) -> bool {
        let is_duplicate = self.last_hash == Some(content_hash);
        if self.first_trigger.is_none() || is_duplicate {
            self.first_trigger.get_or_insert(now);
        } else {
            self.first_trigger = Some(now);
        }
        self.last_trigger = Some(now);
        self.last_hash = Some(content_hash);
        is_duplicate
    }

    /// The earliest instant a pending save is due, combining the two
    /// timers by taking the minimum of (debounce, remaining-max).
    pub fn due_at(&self) -> Option<Instant> {
        let last = self.last_trigger?;
        let first = self.first_trigger.unwrap_or(last);
        Some((last + DEBOUNCE).min(first + MAX_DEBOUNCE))
    }

    pub fn should_flush_now(&self, now: Instant) -> bool {
        matches!(self.due_at(), Some(due) if now >= due)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct PersistenceAdapter {
    store: Box<dyn BlobStore>,
    pub debounce: DebounceTimer,
}

impl PersistenceAdapter {
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self { store, debounce: DebounceTimer::default() }
    }

    pub fn has_saved(&self) -> bool {
        self.store.get(KEY_FS).is_some()
    }

    /// Persist the current tree and cwd, rotating the previous blob into
    /// the backup chain first.
    pub fn save(&mut self, fs: &FsState) -> Result<(), PersistError> {
        if let Some(previous) = self.store.get(KEY_FS) {
            self.rotate_backup(previous);
        }

        let snapshot = Snapshot {
            root: fs.root().clone(),
            current_path: fs.current_path.clone(),
            mode: fs.profile().name().to_string(),
            version: CURRENT_SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
        };
        let serialised = serde_json::to_string(&snapshot)
            .map_err(|e| PersistError::Corrupt(e.to_string()))?;
        self.store.set(KEY_FS, serialised);
        self.store.set(KEY_MODE, snapshot.mode);
        self.store.set(KEY_VERSION, CURRENT_SCHEMA_VERSION.to_string());
        self.debounce.reset();
        Ok(())
    }

    fn rotate_backup(&mut self, previous_blob: String) {
        let mut indices: Vec<usize> = self
            .store
            .keys_with_prefix(BACKUP_PREFIX)
            .iter()
            .filter_map(|k| k.strip_prefix(BACKUP_PREFIX)?.parse::<usize>().ok())
            .collect();
        indices.sort_unstable();
        while indices.len() >= MAX_BACKUPS {
            let oldest = indices.remove(0);
            self.store.remove(&format!("{BACKUP_PREFIX}{oldest}"));
        }
        let next = indices.last().map(|n| n + 1).unwrap_or(0);
        self.store.set(&format!("{BACKUP_PREFIX}{next}"), previous_blob);
    }

    /// Load a previously saved tree. A version mismatch invokes the
    /// (currently no-op) migration hook before returning.
    pub fn load(&self, profile: Profile) -> Result<FsState, PersistError> {
        let blob = self.store.get(KEY_FS).ok_or(PersistError::NotFound)?;
        let mut snapshot: Snapshot =
            serde_json::from_str(&blob).map_err(|e| PersistError::Corrupt(e.to_string()))?;
        if snapshot.version != CURRENT_SCHEMA_VERSION {
            snapshot = migrate(snapshot);
        }
        Ok(FsState::from_parts(snapshot.root, snapshot.current_path, profile))
    }

    pub fn clear(&mut self) {
        self.store.remove(KEY_FS);
        self.store.remove(KEY_MODE);
        self.store.remove(KEY_VERSION);
        for key in self.store.keys_with_prefix(BACKUP_PREFIX) {
            self.store.remove(&key);
        }
        self.debounce.reset();
    }
}

/// Schema migration hook. No prior schema versions exist yet, so this is a
/// no-op that just stamps the current version.
fn migrate(mut snapshot: Snapshot) -> Snapshot {
    snapshot.version = CURRENT_SCHEMA_VERSION.to_string();
    snapshot
}

/// A simple content hash used to coalesce duplicate debounced saves.
pub fn content_hash(fs: &FsState) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    fs.total_size().hash(&mut hasher);
    fs.pwd().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::blob_store::MemoryBlobStore;

    #[test]
    fn save_then_load_roundtrips_tree() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "hi.txt", "hello").unwrap();

        let mut adapter = PersistenceAdapter::new(Box::new(MemoryBlobStore::new()));
        adapter.save(&fs).unwrap();
        assert!(adapter.has_saved());

        let loaded = adapter.load(Profile::Default).unwrap();
        let path = loaded.resolve_path("hi.txt");
        assert_eq!(loaded.get_node(&path).unwrap().content(), Some("hello"));
        assert_eq!(loaded.current_path, fs.current_path);
    }

    #[test]
    fn clear_removes_all_keys_including_backups() {
        let fs = FsState::new(Profile::Default);
        let mut adapter = PersistenceAdapter::new(Box::new(MemoryBlobStore::new()));
        adapter.save(&fs).unwrap();
        adapter.save(&fs).unwrap();
        adapter.clear();
        assert!(!adapter.has_saved());
        assert!(adapter.load(Profile::Default).is_err());
    }

    #[test]
    fn backups_are_capped() {
        let fs = FsState::new(Profile::Default);
        let mut adapter = PersistenceAdapter::new(Box::new(MemoryBlobStore::new()));
        for _ in 0..(MAX_BACKUPS + 5) {
            adapter.save(&fs).unwrap();
        }
        assert!(adapter.store.keys_with_prefix(BACKUP_PREFIX).len() <= MAX_BACKUPS);
    }

    #[test]
    fn debounce_due_at_takes_minimum_of_both_timers() {
        let mut timer = DebounceTimer::default();
        let t0 = Instant::now();
        timer.note_trigger(t0, 1);
        let due = timer.due_at().unwrap();
        assert!(due <= t0 + MAX_DEBOUNCE);
        assert!(due >= t0);
    }
}
