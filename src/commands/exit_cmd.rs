//! exit - Leave the shell

use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

/// Handle the exit command.
///
/// Accepts an optional integer status, which becomes the process exit code
/// in interactive mode.
pub fn handle_exit(shell: &mut Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    if args.len() > 1 {
        return Err(ShellError::too_many_arguments("exit"));
    }
    let code = match args.first() {
        None => 0,
        Some(arg) => arg
            .parse::<i32>()
            .map_err(|_| ShellError::argument("exit", format!("{}: numeric argument required", arg)))?,
    };
    shell.stop(code);
    Ok(CommandResult::success("Exiting VFS emulator\n"))
}
