// src/commands/types.rs
use std::fmt;
use std::str::FromStr;

use crate::errors::ShellError;

/// Outcome of one command: its report and exit status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn success(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), stderr: String::new(), exit_code: 0 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<ShellError> for CommandResult {
    fn from(err: ShellError) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("{}\n", err),
            exit_code: err.exit_code(),
        }
    }
}

/// Every command the shell knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Exit,
    Pwd,
    Ls,
    Cd,
    Mkdir,
    Touch,
    Cat,
    Tac,
    Find,
    History,
    ConfDump,
    ListScripts,
    RunScript,
}

impl CommandKind {
    pub const ALL: [CommandKind; 13] = [
        CommandKind::Ls,
        CommandKind::Cd,
        CommandKind::Pwd,
        CommandKind::Mkdir,
        CommandKind::Touch,
        CommandKind::Cat,
        CommandKind::Tac,
        CommandKind::Find,
        CommandKind::History,
        CommandKind::ConfDump,
        CommandKind::ListScripts,
        CommandKind::RunScript,
        CommandKind::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Exit => "exit",
            CommandKind::Pwd => "pwd",
            CommandKind::Ls => "ls",
            CommandKind::Cd => "cd",
            CommandKind::Mkdir => "mkdir",
            CommandKind::Touch => "touch",
            CommandKind::Cat => "cat",
            CommandKind::Tac => "tac",
            CommandKind::Find => "find",
            CommandKind::History => "history",
            CommandKind::ConfDump => "conf-dump",
            CommandKind::ListScripts => "list-scripts",
            CommandKind::RunScript => "run-script",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ShellError::CommandNotFound(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        for kind in CommandKind::ALL {
            assert_eq!(kind.name().parse::<CommandKind>().unwrap(), kind);
        }
        assert_eq!("conf-dump".parse::<CommandKind>().unwrap(), CommandKind::ConfDump);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            "rm".parse::<CommandKind>(),
            Err(ShellError::CommandNotFound("rm".to_string()))
        );
        assert!("LS".parse::<CommandKind>().is_err());
    }

    #[test]
    fn test_result_from_error() {
        let result = CommandResult::from(ShellError::CommandNotFound("frob".into()));
        assert_eq!(result.exit_code, 127);
        assert_eq!(result.stderr, "frob: command not found\n");
        assert!(!result.is_success());
    }
}
