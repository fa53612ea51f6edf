// src/commands/pwd/mod.rs
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

pub fn handle_pwd(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    if !args.is_empty() {
        return Err(ShellError::too_many_arguments("pwd"));
    }
    Ok(CommandResult::success(format!("{}\n", shell.cwd())))
}
