// src/commands/mkdir/mod.rs
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

/// `mkdir <name>`: the parent must already exist.
pub fn handle_mkdir(shell: &mut Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = match args {
        [name] => name,
        [] => return Err(ShellError::argument("mkdir", "missing operand")),
        _ => return Err(ShellError::too_many_arguments("mkdir")),
    };
    let target = shell.resolve(name);
    shell
        .fs
        .create_directory(&target)
        .map_err(|e| ShellError::fs("mkdir", e))?;
    Ok(CommandResult::ok())
}
