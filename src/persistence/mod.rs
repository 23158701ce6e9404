//! Persistence: an opaque blob key-value backend plus the adapter that
//! serialises the filesystem tree through it with debounced saves.

pub mod adapter;
pub mod blob_store;

pub use adapter::{content_hash, PersistError, PersistenceAdapter};
pub use blob_store::{BlobStore, MemoryBlobStore};
