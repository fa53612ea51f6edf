use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

/// Show the most recent history entries, numbered from the start of the
/// session.
pub fn handle_history(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    if !args.is_empty() {
        return Err(ShellError::too_many_arguments("history"));
    }

    let history = shell.history();
    let start = history.len().saturating_sub(shell.options().history_display);
    let mut stdout = String::new();
    for (i, cmd) in history.iter().enumerate().skip(start) {
        stdout.push_str(&format!("{:5}  {}\n", i + 1, cmd));
    }

    Ok(CommandResult::success(stdout))
}
