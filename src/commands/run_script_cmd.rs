//! run-script - Execute a script file inside the current session

use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::script::script_path;
use crate::shell::Shell;

/// `run-script <name>`; `.txt` is appended when missing.
pub fn handle_run_script(shell: &mut Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    let [name] = args else {
        return Err(ShellError::argument(
            "run-script",
            "exactly one script name required (see 'list-scripts')",
        ));
    };
    let path = script_path(&shell.options().scripts_dir, name);
    let report = shell.run_script(&path)?;
    let exit_code = if report.is_success() { 0 } else { 1 };
    Ok(CommandResult::with_exit_code(report.transcript, String::new(), exit_code))
}
