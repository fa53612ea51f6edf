//! In-Memory File System Implementation
//!
//! A flat map from absolute normalized path to node. Directories keep their
//! child names in creation order, so the map and the child lists must always
//! agree: every non-root key has a parent directory that lists its last
//! segment exactly once.

use indexmap::IndexMap;

use super::path;
use super::types::*;

/// In-memory virtual file system.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    nodes: IndexMap<String, Node>,
}

impl VirtualFs {
    /// Create a file system holding only the root directory.
    pub fn new() -> Self {
        let mut nodes = IndexMap::new();
        nodes.insert("/".to_string(), Node::directory());
        Self { nodes }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&Node> {
        self.nodes.get(path)
    }

    pub(crate) fn get_mut(&mut self, path: &str) -> Option<&mut Node> {
        self.nodes.get_mut(path)
    }

    pub fn kind_of(&self, path: &str) -> Result<NodeKind, FsError> {
        self.nodes
            .get(path)
            .map(Node::kind)
            .ok_or_else(|| FsError::not_found(path))
    }

    /// Child names of a directory, in creation order.
    pub fn list_children(&self, path: &str) -> Result<&[String], FsError> {
        match self.nodes.get(path) {
            Some(Node::Directory { children, .. }) => Ok(children),
            Some(Node::File { .. }) => Err(FsError::not_a_directory(path)),
            None => Err(FsError::not_found(path)),
        }
    }

    /// Create an empty directory. The parent must already exist.
    pub fn create_directory(&mut self, path: &str) -> Result<(), FsError> {
        if self.exists(path) {
            return Err(FsError::already_exists(path));
        }
        self.insert_child(path, Node::directory())
    }

    /// Create an empty file. Returns `false` when the path already existed,
    /// in which case nothing is touched.
    pub fn create_file(&mut self, path: &str) -> Result<bool, FsError> {
        if self.exists(path) {
            return Ok(false);
        }
        self.insert_child(path, Node::file(""))?;
        Ok(true)
    }

    /// Replace the content of a file, creating it when absent.
    pub fn write_file(&mut self, path: &str, data: &str) -> Result<(), FsError> {
        match self.nodes.get_mut(path) {
            Some(Node::File { content, mtime }) => {
                *content = data.to_string();
                *mtime = chrono::Local::now();
                Ok(())
            }
            Some(Node::Directory { .. }) => Err(FsError::not_a_file(path)),
            None => self.insert_child(path, Node::file(data)),
        }
    }

    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        match self.nodes.get(path) {
            Some(Node::File { content, .. }) => Ok(content),
            Some(Node::Directory { .. }) => Err(FsError::not_a_file(path)),
            None => Err(FsError::not_found(path)),
        }
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first listing of everything below `root` (root excluded),
    /// following child creation order.
    pub fn walk(&self, root: &str) -> Result<Vec<(String, NodeKind)>, FsError> {
        let mut out = Vec::new();
        self.walk_into(root, &mut out)?;
        Ok(out)
    }

    fn walk_into(&self, dir: &str, out: &mut Vec<(String, NodeKind)>) -> Result<(), FsError> {
        for name in self.list_children(dir)? {
            let child = path::join(dir, name);
            let kind = self.kind_of(&child)?;
            out.push((child.clone(), kind));
            if kind == NodeKind::Directory {
                self.walk_into(&child, out)?;
            }
        }
        Ok(())
    }

    fn insert_child(&mut self, path: &str, node: Node) -> Result<(), FsError> {
        let parent = path::parent(path);
        match self.nodes.get_mut(&parent) {
            Some(Node::Directory { children, .. }) => {
                children.push(path::file_name(path).to_string());
            }
            Some(Node::File { .. }) => return Err(FsError::not_a_directory(parent)),
            None => return Err(FsError::not_found(parent)),
        }
        self.nodes.insert(path.to_string(), node);
        Ok(())
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}
