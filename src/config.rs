//! Shell configuration
//!
//! Options can come from a TOML file; command-line flags override them.
//!
//! ```toml
//! vfs_name = "myvfs"
//! vfs_path = "/srv/tree"
//! startup_script = "init.txt"
//! scripts_dir = "scripts"
//! history_display = 10
//! import_char_limit = 10000
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::fs::DEFAULT_CHAR_LIMIT;

pub const DEFAULT_VFS_NAME: &str = "myvfs";
pub const DEFAULT_HISTORY_DISPLAY: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Options for creating a shell session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellOptions {
    /// Name shown in the prompt
    pub vfs_name: String,
    /// Host directory imported as the initial tree
    pub vfs_path: Option<PathBuf>,
    /// Script run before the interactive loop
    pub startup_script: Option<PathBuf>,
    /// Where relative script names are looked up
    pub scripts_dir: PathBuf,
    /// How many history entries `history` shows
    pub history_display: usize,
    /// Characters kept per imported file
    pub import_char_limit: usize,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            vfs_name: DEFAULT_VFS_NAME.to_string(),
            vfs_path: None,
            startup_script: None,
            scripts_dir: PathBuf::from("."),
            history_display: DEFAULT_HISTORY_DISPLAY,
            import_char_limit: DEFAULT_CHAR_LIMIT,
        }
    }
}

impl ShellOptions {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }
}
