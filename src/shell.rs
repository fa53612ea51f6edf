//! Shell Session
//!
//! Main entry point for the virtual shell.
//! Ties together the parser, the command dispatcher, and the filesystem.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::commands::{dispatch, CommandKind, CommandResult};
use crate::config::ShellOptions;
use crate::errors::ShellError;
use crate::fs::{path, VirtualFs};
use crate::parser::split_words;
use crate::script::{ScriptReport, ScriptRunner};

/// Deepest allowed chain of scripts started from scripts.
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// Where the initial tree came from.
#[derive(Debug, Clone, PartialEq)]
pub enum VfsSource {
    Default,
    Imported { path: PathBuf, nodes: usize },
    Fallback { requested: PathBuf, reason: String },
}

impl fmt::Display for VfsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsSource::Default => write!(f, "<built-in default tree>"),
            VfsSource::Imported { path, nodes } => {
                write!(f, "{} ({} nodes imported)", path.display(), nodes)
            }
            VfsSource::Fallback { requested, reason } => write!(
                f,
                "<built-in default tree> (could not import {}: {})",
                requested.display(),
                reason
            ),
        }
    }
}

/// One interpreter session: the tree plus everything the commands mutate.
pub struct Shell {
    pub fs: VirtualFs,
    cwd: String,
    history: Vec<String>,
    running: bool,
    exit_code: i32,
    script_depth: usize,
    options: ShellOptions,
    source: VfsSource,
}

impl Shell {
    /// Create a session, importing `options.vfs_path` when set. A path that
    /// cannot be imported falls back to the built-in tree.
    pub async fn new(options: ShellOptions) -> Self {
        let (fs, source) = match options.vfs_path.clone() {
            None => {
                log::info!("no vfs path given, using the built-in tree");
                (VirtualFs::with_default_tree(), VfsSource::Default)
            }
            Some(requested) => {
                let mut fs = VirtualFs::new();
                match fs.import_from_directory(&requested, options.import_char_limit).await {
                    Ok(report) => (fs, VfsSource::Imported { path: requested, nodes: report.imported }),
                    Err(e) => {
                        log::warn!("falling back to the built-in tree: {}", e);
                        let reason = e.to_string();
                        (VirtualFs::with_default_tree(), VfsSource::Fallback { requested, reason })
                    }
                }
            }
        };
        Self::with_fs(fs, options, source)
    }

    /// Create a session over an existing tree.
    pub fn with_fs(fs: VirtualFs, options: ShellOptions, source: VfsSource) -> Self {
        Self {
            fs,
            cwd: "/".to_string(),
            history: Vec::new(),
            running: true,
            exit_code: 0,
            script_depth: 0,
            options,
            source,
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub(crate) fn set_cwd(&mut self, cwd: String) {
        log::debug!("cwd {} -> {}", self.cwd, cwd);
        self.cwd = cwd;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub(crate) fn stop(&mut self, code: i32) {
        self.running = false;
        self.exit_code = code;
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    pub fn source(&self) -> &VfsSource {
        &self.source
    }

    /// Resolve user input against the current directory.
    pub fn resolve(&self, raw: &str) -> String {
        let resolved = path::resolve(raw, &self.cwd);
        log::debug!("resolved {:?} in {} to {}", raw, self.cwd, resolved);
        resolved
    }

    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.options.vfs_name, self.cwd)
    }

    /// Execute one raw input line and record it in the history.
    /// Blank lines do nothing and are not recorded.
    pub fn exec_line(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::ok();
        }
        let result = match split_words(line) {
            Ok(words) => self.execute(&words),
            Err(e) => ShellError::from(e).into(),
        };
        self.history.push(line.to_string());
        result
    }

    /// Execute an already split command line.
    pub fn execute(&mut self, words: &[String]) -> CommandResult {
        let Some((name, args)) = words.split_first() else {
            return CommandResult::ok();
        };
        match name.parse::<CommandKind>() {
            Ok(kind) => dispatch(self, kind, args),
            Err(e) => e.into(),
        }
    }

    /// Run a script file through this session.
    pub fn run_script(&mut self, script: &Path) -> Result<ScriptReport, ShellError> {
        if self.script_depth >= MAX_SCRIPT_DEPTH {
            return Err(ShellError::script(
                "run-script",
                format!("maximum script nesting depth ({}) exceeded", MAX_SCRIPT_DEPTH),
            ));
        }
        let source = std::fs::read_to_string(script).map_err(|e| {
            let message = match e.kind() {
                std::io::ErrorKind::NotFound => format!("script '{}' not found", script.display()),
                _ => format!("cannot read script '{}': {}", script.display(), e),
            };
            ShellError::script("run-script", message)
        })?;

        self.script_depth += 1;
        let report = ScriptRunner::new(self, script.display().to_string()).run_source(&source);
        self.script_depth -= 1;
        Ok(report)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_shell() -> Shell {
        Shell::with_fs(VirtualFs::new(), ShellOptions::default(), VfsSource::Default)
    }

    fn run(shell: &mut Shell, line: &str) -> CommandResult {
        shell.exec_line(line)
    }

    #[test]
    fn test_mkdir_ls_cd_pwd() {
        let mut shell = make_shell();
        assert!(run(&mut shell, "mkdir projects").is_success());
        assert!(run(&mut shell, "ls").stdout.lines().any(|l| l == "projects/"));
        assert!(run(&mut shell, "cd projects").is_success());
        assert_eq!(run(&mut shell, "pwd").stdout, "/projects\n");
    }

    #[test]
    fn test_cd_parent_reaches_root() {
        let mut shell = make_shell();
        run(&mut shell, "mkdir a");
        run(&mut shell, "cd a");
        run(&mut shell, "mkdir b");
        run(&mut shell, "cd b");
        assert_eq!(shell.cwd(), "/a/b");
        for _ in 0..4 {
            assert!(run(&mut shell, "cd ..").is_success());
        }
        assert_eq!(shell.cwd(), "/");
    }

    #[test]
    fn test_unknown_command() {
        let mut shell = make_shell();
        let result = run(&mut shell, "frobnicate now");
        assert_eq!(result.exit_code, 127);
        assert_eq!(result.stderr, "frobnicate: command not found\n");
    }

    #[test]
    fn test_parse_error_is_reported_and_recorded() {
        let mut shell = make_shell();
        let result = run(&mut shell, "cat 'unterminated");
        assert_eq!(result.exit_code, 2);
        assert!(result.stderr.starts_with("parse error:"));
        assert_eq!(shell.history(), ["cat 'unterminated"]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let mut shell = make_shell();
        assert!(run(&mut shell, "   ").is_success());
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_prompt() {
        let mut shell = make_shell();
        run(&mut shell, "mkdir x");
        run(&mut shell, "cd x");
        assert_eq!(shell.prompt(), "myvfs:/x$ ");
    }

    #[test]
    fn test_script_depth_limit() {
        let mut shell = make_shell();
        shell.script_depth = MAX_SCRIPT_DEPTH;
        let err = shell.run_script(Path::new("whatever.txt")).unwrap_err();
        assert!(err.to_string().contains("nesting depth"));
    }

    #[tokio::test]
    async fn test_new_falls_back_on_bad_path() {
        let options = ShellOptions {
            vfs_path: Some(PathBuf::from("/definitely/not/here/vfs")),
            ..Default::default()
        };
        let shell = Shell::new(options).await;
        assert!(matches!(shell.source(), VfsSource::Fallback { .. }));
        assert!(shell.fs.exists("/home/user"));
    }

    #[tokio::test]
    async fn test_new_without_path_uses_default_tree() {
        let shell = Shell::new(ShellOptions::default()).await;
        assert_eq!(shell.source(), &VfsSource::Default);
        assert!(shell.fs.exists("/etc/motd"));
        assert_eq!(shell.cwd(), "/");
    }
}
