//! Virtual Filesystem Types
//!
//! Core node model and error types for the in-memory filesystem tree.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of direct children a directory may hold.
pub const MAX_DIR_CHILDREN: usize = 1000;
/// Maximum size of a single file's content, in bytes.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
/// Maximum aggregate byte size of the whole tree.
pub const MAX_TREE_SIZE: usize = 50 * 1024 * 1024;
/// Maximum length of a single path segment (file or directory name).
pub const MAX_NAME_LEN: usize = 255;

/// Filesystem errors, mirroring POSIX errno categories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotDirectory(String),

    #[error("is a directory: {0}")]
    IsDirectory(String),

    #[error("file exists: {0}")]
    AlreadyExists(String),

    #[error("directory not empty: {0}")]
    NotEmpty(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("directory entry limit exceeded ({max} children) at {0}", max = MAX_DIR_CHILDREN)]
    TooManyChildren(String),

    #[error("file size limit exceeded ({max} bytes) at {0}", max = MAX_FILE_SIZE)]
    FileTooLarge(String),

    #[error("total filesystem size limit exceeded ({max} bytes)", max = MAX_TREE_SIZE)]
    TreeTooLarge,
}

/// A tagged filesystem node: either a file or a directory.
///
/// Directories own their children by name; insertion order is preserved
/// (stable for listing) even though lookup does not depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FsNode {
    File {
        name: String,
        permissions: String,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        size: u64,
        content: String,
    },
    Directory {
        name: String,
        permissions: String,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        size: u64,
        children: IndexMap<String, FsNode>,
    },
}

impl FsNode {
    pub fn new_file(name: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        let content = content.into();
        let size = content.len() as u64;
        FsNode::File {
            name: name.into(),
            permissions: "rw-r--r--".to_string(),
            created_at: now,
            modified_at: now,
            size,
            content,
        }
    }

    pub fn new_directory(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        FsNode::Directory {
            name: name.into(),
            permissions: "rwxr-xr-x".to_string(),
            created_at: now,
            modified_at: now,
            size: 0,
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } => name,
            FsNode::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        match self {
            FsNode::File { modified_at, .. } => *modified_at,
            FsNode::Directory { modified_at, .. } => *modified_at,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            FsNode::File { size, .. } => *size,
            FsNode::Directory { size, .. } => *size,
        }
    }

    pub fn children(&self) -> Option<&IndexMap<String, FsNode>> {
        match self {
            FsNode::Directory { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut IndexMap<String, FsNode>> {
        match self {
            FsNode::Directory { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content, .. } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Recursive byte-size of this node (file content length, or the sum
    /// over all descendants for a directory). Used for the whole-tree cap;
    /// the `size` field on directories is advisory and may lag behind this.
    pub fn recursive_size(&self) -> u64 {
        match self {
            FsNode::File { content, .. } => content.len() as u64,
            FsNode::Directory { children, .. } => {
                children.values().map(|c| c.recursive_size()).sum()
            }
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        match self {
            FsNode::File { modified_at, .. } => *modified_at = now,
            FsNode::Directory { modified_at, .. } => *modified_at = now,
        }
    }
}

/// Dotfiles after non-dotfiles, then case-insensitive lexicographic order.
pub fn compare_entry_names(a: &str, b: &str) -> std::cmp::Ordering {
    let a_dot = a.starts_with('.');
    let b_dot = b.starts_with('.');
    match (a_dot, b_dot) {
        (false, true) => std::cmp::Ordering::Less,
        (true, false) => std::cmp::Ordering::Greater,
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotfiles_sort_after_non_dotfiles() {
        let mut names = vec![".bashrc", "zeta", "alpha", ".git"];
        names.sort_by(|a, b| compare_entry_names(a, b));
        assert_eq!(names, vec!["alpha", "zeta", ".bashrc", ".git"]);
    }

    #[test]
    fn recursive_size_sums_children() {
        let now = Utc::now();
        let mut dir = FsNode::new_directory("root", now);
        dir.children_mut()
            .unwrap()
            .insert("a.txt".to_string(), FsNode::new_file("a.txt", "hello", now));
        dir.children_mut()
            .unwrap()
            .insert("b.txt".to_string(), FsNode::new_file("b.txt", "world!", now));
        assert_eq!(dir.recursive_size(), 11);
    }
}
