//! Virtual Filesystem
//!
//! A tree-shaped in-memory filesystem: every directory owns its children
//! directly (no flat path table), matching the data model the shell and
//! persistence layer both operate on.

pub mod tree;
pub mod types;

pub use tree::{DirEntry, FsState};
pub use types::{FsError, FsNode, MAX_DIR_CHILDREN, MAX_FILE_SIZE, MAX_TREE_SIZE};
