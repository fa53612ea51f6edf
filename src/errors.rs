//! Shell Errors
//!
//! Every failure a command can report. Handlers return these; the dispatcher
//! turns them into a one-line diagnostic and a non-zero exit code.

use thiserror::Error;

use crate::fs::FsError;
use crate::parser::ParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{command}: {message}")]
    Argument { command: &'static str, message: String },

    #[error("{command}: {source}")]
    Fs {
        command: &'static str,
        #[source]
        source: FsError,
    },

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{command}: {message}")]
    Script { command: &'static str, message: String },
}

impl ShellError {
    pub fn argument(command: &'static str, message: impl Into<String>) -> Self {
        ShellError::Argument { command, message: message.into() }
    }

    pub fn too_many_arguments(command: &'static str) -> Self {
        Self::argument(command, "too many arguments")
    }

    pub fn fs(command: &'static str, source: FsError) -> Self {
        ShellError::Fs { command, source }
    }

    pub fn script(command: &'static str, message: impl Into<String>) -> Self {
        ShellError::Script { command, message: message.into() }
    }

    /// Exit status reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::Parse(_) | ShellError::Argument { .. } => 2,
            ShellError::CommandNotFound(_) => 127,
            ShellError::Fs { .. } | ShellError::Script { .. } => 1,
        }
    }
}
