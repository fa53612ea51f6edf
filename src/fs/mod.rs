//! File System Module
//!
//! The in-memory tree behind the shell, the path resolver that produces its
//! keys, and the one-time import from a host directory.

pub mod types;
pub mod path;
pub mod in_memory_fs;
pub mod import;
mod default_tree;

pub use types::*;
pub use in_memory_fs::VirtualFs;
pub use import::{ImportReport, SkippedEntry, BINARY_PLACEHOLDER, DEFAULT_CHAR_LIMIT};
