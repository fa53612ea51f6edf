//! vfs-shell - A command shell over an in-memory virtual file system
//!
//! The tree lives entirely in memory and is optionally seeded from a host
//! directory. Commands run interactively or from script files, one line at a
//! time, each reporting success or failure.

pub mod commands;
pub mod config;
pub mod errors;
pub mod fs;
pub mod parser;
pub mod repl;
pub mod script;
pub mod shell;

pub use commands::{CommandKind, CommandResult};
pub use config::ShellOptions;
pub use errors::ShellError;
pub use fs::VirtualFs;
pub use script::{ScriptReport, ScriptRunner};
pub use shell::{Shell, VfsSource};
