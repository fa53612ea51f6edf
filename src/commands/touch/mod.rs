// src/commands/touch/mod.rs
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

/// `touch <name>`: create an empty file. An existing path is left alone.
pub fn handle_touch(shell: &mut Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = match args {
        [name] => name,
        [] => return Err(ShellError::argument("touch", "missing file operand")),
        _ => return Err(ShellError::too_many_arguments("touch")),
    };
    let target = shell.resolve(name);
    let created = shell
        .fs
        .create_file(&target)
        .map_err(|e| ShellError::fs("touch", e))?;

    if created {
        Ok(CommandResult::ok())
    } else {
        Ok(CommandResult::success(format!("touch: '{}' already exists\n", target)))
    }
}
