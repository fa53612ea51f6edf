//! File System Types
//!
//! Core types for the virtual file system.

use chrono::{DateTime, Local};
use thiserror::Error;

/// Size reported for directories in long listings.
pub const DIRECTORY_SIZE: u64 = 4096;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FsError {
    #[error("'{path}': No such file or directory")]
    NotFound { path: String },

    #[error("'{path}': Not a directory")]
    NotADirectory { path: String },

    #[error("'{path}': Is a directory")]
    NotAFile { path: String },

    #[error("'{path}': File exists")]
    AlreadyExists { path: String },

    #[error("'{path}': {message}")]
    Io { path: String, message: String },
}

impl FsError {
    pub fn not_found(path: impl Into<String>) -> Self {
        FsError::NotFound { path: path.into() }
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        FsError::NotADirectory { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<String>) -> Self {
        FsError::NotAFile { path: path.into() }
    }

    pub fn already_exists(path: impl Into<String>) -> Self {
        FsError::AlreadyExists { path: path.into() }
    }

    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        FsError::Io { path: path.into(), message: err.to_string() }
    }
}

/// Kind of a node. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Directory => "directory",
            NodeKind::File => "file",
        }
    }
}

/// One entry in the virtual tree.
#[derive(Debug, Clone)]
pub enum Node {
    Directory {
        /// Child names in creation order.
        children: Vec<String>,
        mtime: DateTime<Local>,
    },
    File {
        content: String,
        mtime: DateTime<Local>,
    },
}

impl Node {
    pub fn directory() -> Self {
        Node::Directory { children: Vec::new(), mtime: Local::now() }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into(), mtime: Local::now() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn mtime(&self) -> DateTime<Local> {
        match self {
            Node::Directory { mtime, .. } | Node::File { mtime, .. } => *mtime,
        }
    }

    pub fn set_mtime(&mut self, when: DateTime<Local>) {
        match self {
            Node::Directory { mtime, .. } | Node::File { mtime, .. } => *mtime = when,
        }
    }

    /// Byte size for files, a fixed block size for directories.
    pub fn size(&self) -> u64 {
        match self {
            Node::Directory { .. } => DIRECTORY_SIZE,
            Node::File { content, .. } => content.len() as u64,
        }
    }
}
