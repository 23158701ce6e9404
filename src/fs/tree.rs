//! Filesystem tree operations: path resolution and CRUD primitives.

use chrono::{DateTime, Utc};

use super::types::{compare_entry_names, FsError, FsNode, MAX_DIR_CHILDREN, MAX_FILE_SIZE, MAX_NAME_LEN, MAX_TREE_SIZE};
use crate::profile::Profile;

/// Owns the root node and tracks the current directory as an ordered
/// sequence of path segments (never a raw string, per the data model).
pub struct FsState {
    root: FsNode,
    pub current_path: Vec<String>,
    profile: Profile,
}

/// A single listed entry, used by `ls` and the autocompletion oracle.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
    pub permissions: String,
}

impl FsState {
    /// A fresh tree with just the root directory, cwd at the profile home.
    pub fn new(profile: Profile) -> Self {
        let now = Utc::now();
        let mut state = FsState {
            root: FsNode::new_directory("", now),
            current_path: Vec::new(),
            profile,
        };
        let home = state.profile.home();
        let _ = state.mkdir_p(&home, now);
        state.current_path = home;
        state
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Rebuild a state from its persisted parts (used by the persistence
    /// adapter on load).
    pub fn from_parts(root: FsNode, current_path: Vec<String>, profile: Profile) -> Self {
        FsState { root, current_path, profile }
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut FsNode {
        &mut self.root
    }

    /// Whole-tree byte sum, computed on demand (spec: advisory, not cached
    /// with hard guarantees, but cheap enough to recompute per mutation at
    /// this scale).
    pub fn total_size(&self) -> u64 {
        self.root.recursive_size()
    }

    /// Resolve a raw path string against the current directory into an
    /// absolute ordered sequence of names. Never panics on any input.
    ///
    /// Rules: leading `/` is absolute; leading `~` or `~/` expands to the
    /// profile home; `.`/`..` collapse; empty segments are dropped.
    pub fn resolve_path(&self, raw: &str) -> Vec<String> {
        let mut base: Vec<String> = if raw.starts_with('/') {
            Vec::new()
        } else if raw == "~" || raw.starts_with("~/") {
            self.profile.home()
        } else {
            self.current_path.clone()
        };

        let rest = if raw.starts_with('/') {
            raw
        } else if raw == "~" {
            ""
        } else if let Some(stripped) = raw.strip_prefix("~/") {
            stripped
        } else {
            raw
        };

        for segment in rest.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    base.pop();
                }
                other => base.push(other.to_string()),
            }
        }
        base
    }

    /// Look up a node by absolute path (empty path == root).
    pub fn get_node(&self, path: &[String]) -> Option<&FsNode> {
        let mut node = &self.root;
        for segment in path {
            node = node.children()?.get(segment)?;
        }
        Some(node)
    }

    pub fn get_node_mut(&mut self, path: &[String]) -> Option<&mut FsNode> {
        let mut node = &mut self.root;
        for segment in path {
            node = node.children_mut()?.get_mut(segment)?;
        }
        Some(node)
    }

    /// Render an arbitrary path as a `/`-joined absolute string.
    pub fn path_string(path: &[String]) -> String {
        if path.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", path.join("/"))
        }
    }

    /// Render the current directory as a `/`-joined absolute path.
    pub fn pwd(&self) -> String {
        Self::path_string(&self.current_path)
    }

    /// `cd`: resolve and switch directory, leaving the path untouched on
    /// any failure (per the invariant that the cwd always resolves).
    pub fn change_dir(&mut self, raw: &str) -> Result<(), FsError> {
        let target = self.resolve_path(raw);
        match self.get_node(&target) {
            Some(node) if node.is_dir() => {
                self.current_path = target;
                Ok(())
            }
            Some(_) => Err(FsError::NotDirectory(Self::path_string(&target))),
            None => Err(FsError::NotFound(Self::path_string(&target))),
        }
    }

    fn validate_name(name: &str) -> Result<(), FsError> {
        if name.is_empty() {
            return Err(FsError::InvalidArgument("empty name".to_string()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(FsError::InvalidArgument(format!("name too long: {name}")));
        }
        if name.contains('\\') || name.contains('\0') {
            return Err(FsError::InvalidArgument(format!("invalid name: {name}")));
        }
        Ok(())
    }

    fn parent_dir_mut<'a>(&'a mut self, parent_path: &[String]) -> Result<&'a mut FsNode, FsError> {
        let label = Self::path_string(parent_path);
        let node = self
            .get_node_mut(parent_path)
            .ok_or_else(|| FsError::NotFound(label.clone()))?;
        if !node.is_dir() {
            return Err(FsError::NotDirectory(label));
        }
        Ok(node)
    }

    /// Create a file with `content` under `parent_path`, enforcing the
    /// per-file, per-directory, and whole-tree quotas.
    pub fn create_file(
        &mut self,
        parent_path: &[String],
        name: &str,
        content: &str,
    ) -> Result<(), FsError> {
        Self::validate_name(name)?;
        if content.len() > MAX_FILE_SIZE {
            return Err(FsError::FileTooLarge(name.to_string()));
        }
        let projected_total = self.total_size() as i64 - self.existing_size(parent_path, name) as i64
            + content.len() as i64;
        if projected_total > MAX_TREE_SIZE as i64 {
            return Err(FsError::TreeTooLarge);
        }

        let now = Utc::now();
        let parent = self.parent_dir_mut(parent_path)?;
        let children = parent.children_mut().unwrap();
        if !children.contains_key(name) && children.len() >= MAX_DIR_CHILDREN {
            return Err(FsError::TooManyChildren(Self::path_string(parent_path)));
        }
        children.insert(name.to_string(), FsNode::new_file(name, content, now));
        parent.touch(now);
        Ok(())
    }

    fn existing_size(&self, parent_path: &[String], name: &str) -> u64 {
        self.get_node(parent_path)
            .and_then(|p| p.children())
            .and_then(|c| c.get(name))
            .map(|n| n.recursive_size())
            .unwrap_or(0)
    }

    /// Overwrite or append to an existing file, or create it if absent —
    /// used by output redirection and `touch`.
    pub fn write_file(&mut self, path: &[String], content: &str, append: bool) -> Result<(), FsError> {
        let (parent_path, name) = split_parent(path)?;
        let existing = self
            .get_node(&parent_path)
            .and_then(|p| p.children())
            .and_then(|c| c.get(&name));
        let new_content = match existing {
            Some(FsNode::File { content: old, .. }) if append => format!("{old}{content}"),
            Some(FsNode::Directory { .. }) => return Err(FsError::IsDirectory(Self::path_string(path))),
            _ if append => content.to_string(),
            _ => content.to_string(),
        };
        self.create_file(&parent_path, &name, &new_content)
    }

    pub fn create_directory(&mut self, parent_path: &[String], name: &str) -> Result<(), FsError> {
        Self::validate_name(name)?;
        let now = Utc::now();
        let parent = self.parent_dir_mut(parent_path)?;
        let children = parent.children_mut().unwrap();
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        if children.len() >= MAX_DIR_CHILDREN {
            return Err(FsError::TooManyChildren(Self::path_string(parent_path)));
        }
        children.insert(name.to_string(), FsNode::new_directory(name, now));
        parent.touch(now);
        Ok(())
    }

    /// `mkdir -p`: create every missing intermediate directory, ignoring an
    /// already-existing terminal directory.
    pub fn mkdir_p(&mut self, path: &[String], now: DateTime<Utc>) -> Result<(), FsError> {
        let mut current: Vec<String> = Vec::new();
        for segment in path {
            let exists_as_dir = self
                .get_node(&current)
                .and_then(|n| n.children())
                .and_then(|c| c.get(segment))
                .map(|n| n.is_dir());
            match exists_as_dir {
                Some(true) => {}
                Some(false) => return Err(FsError::NotDirectory(segment.clone())),
                None => {
                    let parent = self
                        .get_node_mut(&current)
                        .ok_or_else(|| FsError::NotFound(Self::path_string(&current)))?;
                    let children = parent.children_mut().unwrap();
                    if children.len() >= MAX_DIR_CHILDREN {
                        return Err(FsError::TooManyChildren(Self::path_string(&current)));
                    }
                    children.insert(segment.clone(), FsNode::new_directory(segment.clone(), now));
                    parent.touch(now);
                }
            }
            current.push(segment.clone());
        }
        Ok(())
    }

    /// Remove a node. Directories must be empty unless `recursive`.
    pub fn delete_node(&mut self, path: &[String], recursive: bool) -> Result<(), FsError> {
        let (parent_path, name) = split_parent(path)?;
        let now = Utc::now();
        let parent = self
            .get_node_mut(&parent_path)
            .ok_or_else(|| FsError::NotFound(Self::path_string(&parent_path)))?;
        let children = parent.children_mut().ok_or_else(|| FsError::NotDirectory(Self::path_string(&parent_path)))?;
        match children.get(&name) {
            None => Err(FsError::NotFound(Self::path_string(path))),
            Some(FsNode::Directory { children: inner, .. }) if !inner.is_empty() && !recursive => {
                Err(FsError::NotEmpty(Self::path_string(path)))
            }
            Some(_) => {
                children.shift_remove(&name);
                parent.touch(now);
                Ok(())
            }
        }
    }

    /// List a directory's entries, sorted by the stable comparator.
    pub fn list_dir(&self, path: &[String], include_dotfiles: bool) -> Result<Vec<DirEntry>, FsError> {
        let node = self
            .get_node(path)
            .ok_or_else(|| FsError::NotFound(Self::path_string(path)))?;
        let children = node.children().ok_or_else(|| FsError::NotDirectory(Self::path_string(path)))?;

        let mut entries: Vec<DirEntry> = children
            .values()
            .filter(|c| include_dotfiles || !c.name().starts_with('.'))
            .map(|c| DirEntry {
                name: c.name().to_string(),
                is_dir: c.is_dir(),
                size: c.size(),
                modified_at: c.modified_at(),
                permissions: match c {
                    FsNode::File { permissions, .. } => permissions.clone(),
                    FsNode::Directory { permissions, .. } => permissions.clone(),
                },
            })
            .collect();
        entries.sort_by(|a, b| compare_entry_names(&a.name, &b.name));
        Ok(entries)
    }

    /// Copy a node (and its subtree, if a directory) to a new parent/name.
    pub fn copy_node(
        &mut self,
        src: &[String],
        dest_parent: &[String],
        dest_name: &str,
        recursive: bool,
    ) -> Result<(), FsError> {
        let src_node = self
            .get_node(src)
            .ok_or_else(|| FsError::NotFound(Self::path_string(src)))?
            .clone();
        if src_node.is_dir() && !recursive {
            return Err(FsError::IsDirectory(Self::path_string(src)));
        }
        let mut copied = src_node;
        rename_node(&mut copied, dest_name);
        let now = Utc::now();
        let parent = self.parent_dir_mut(dest_parent)?;
        let children = parent.children_mut().unwrap();
        if !children.contains_key(dest_name) && children.len() >= MAX_DIR_CHILDREN {
            return Err(FsError::TooManyChildren(Self::path_string(dest_parent)));
        }
        children.insert(dest_name.to_string(), copied);
        parent.touch(now);
        Ok(())
    }

    /// Move/rename a node.
    pub fn move_node(&mut self, src: &[String], dest_parent: &[String], dest_name: &str) -> Result<(), FsError> {
        let (src_parent, src_name) = split_parent(src)?;
        let now = Utc::now();
        let removed = {
            let parent = self
                .get_node_mut(&src_parent)
                .ok_or_else(|| FsError::NotFound(Self::path_string(&src_parent)))?;
            let children = parent.children_mut().ok_or_else(|| FsError::NotDirectory(Self::path_string(&src_parent)))?;
            let node = children
                .shift_remove(&src_name)
                .ok_or_else(|| FsError::NotFound(Self::path_string(src)))?;
            parent.touch(now);
            node
        };
        let mut moved = removed;
        rename_node(&mut moved, dest_name);
        let parent = self.parent_dir_mut(dest_parent)?;
        let children = parent.children_mut().unwrap();
        children.insert(dest_name.to_string(), moved);
        parent.touch(now);
        Ok(())
    }
}

fn rename_node(node: &mut FsNode, new_name: &str) {
    match node {
        FsNode::File { name, .. } => *name = new_name.to_string(),
        FsNode::Directory { name, .. } => *name = new_name.to_string(),
    }
}

fn split_parent(path: &[String]) -> Result<(Vec<String>, String), FsError> {
    match path.split_last() {
        Some((last, rest)) => Ok((rest.to_vec(), last.clone())),
        None => Err(FsError::InvalidArgument("cannot operate on root".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_is_idempotent() {
        let state = FsState::new(Profile::Default);
        for raw in ["/a/b/../c", "~", "~/x/../y", "", "///a//b/", "..", "../../.."] {
            let once = state.resolve_path(raw);
            let joined = if once.is_empty() { "/".to_string() } else { format!("/{}", once.join("/")) };
            let twice = state.resolve_path(&joined);
            assert_eq!(once, twice, "raw={raw:?}");
        }
    }

    #[test]
    fn resolve_path_never_panics_on_arbitrary_input() {
        let state = FsState::new(Profile::Default);
        for raw in ["", "/", "~", "~notarealuser", "a/b/c", "../../../../etc", "\0", "a//b///c"] {
            let _ = state.resolve_path(raw);
        }
    }

    #[test]
    fn create_file_then_get() {
        let mut state = FsState::new(Profile::Default);
        let home = state.current_path.clone();
        state.create_file(&home, "hello.txt", "hi").unwrap();
        let path = state.resolve_path("hello.txt");
        let node = state.get_node(&path).unwrap();
        assert_eq!(node.content(), Some("hi"));
    }

    #[test]
    fn mkdir_p_then_file_then_list() {
        let mut state = FsState::new(Profile::Default);
        let now = Utc::now();
        let target = state.resolve_path("a/b/c");
        state.mkdir_p(&target, now).unwrap();
        state.create_file(&target, "file.txt", "x").unwrap();
        let listing = state.list_dir(&target, false).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "file.txt");
    }

    #[test]
    fn per_directory_child_cap_enforced() {
        let mut state = FsState::new(Profile::Default);
        let home = state.current_path.clone();
        for i in 0..MAX_DIR_CHILDREN {
            state.create_file(&home, &format!("f{i}"), "").unwrap();
        }
        let err = state.create_file(&home, "overflow", "").unwrap_err();
        assert_eq!(err, FsError::TooManyChildren(FsState::path_string(&home)));
    }

    #[test]
    fn rmdir_requires_empty_unless_recursive() {
        let mut state = FsState::new(Profile::Default);
        let home = state.current_path.clone();
        let now = Utc::now();
        let dir = state.resolve_path("d");
        state.mkdir_p(&dir, now).unwrap();
        state.create_file(&dir, "x", "y").unwrap();
        assert!(state.delete_node(&dir, false).is_err());
        state.delete_node(&dir, true).unwrap();
        assert!(state.get_node(&state.resolve_path("d")).is_none());
        let _ = home;
    }
}
