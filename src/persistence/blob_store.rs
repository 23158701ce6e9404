//! Opaque key-value blob backend.
//!
//! Any storage medium — browser `localStorage`, a file on disk, a network
//! service — satisfies this trait; the adapter in [`super::adapter`] only
//! ever talks to `BlobStore`.

use std::collections::HashMap;

pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// Reference implementation used as the default and in tests.
#[derive(Default)]
pub struct MemoryBlobStore {
    data: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.data.keys().filter(|k| k.starts_with(prefix)).cloned().collect()
    }
}
