//! conf-dump - Print the session configuration

use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

pub fn handle_conf_dump(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    if !args.is_empty() {
        return Err(ShellError::too_many_arguments("conf-dump"));
    }
    let options = shell.options();
    let startup = options
        .startup_script
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<none>".to_string());

    let stdout = format!(
        "vfs_name: {}\ncurrent_path: {}\nvfs_source: {}\nstartup_script: {}\nnode_count: {}\n",
        options.vfs_name,
        shell.cwd(),
        shell.source(),
        startup,
        shell.fs.node_count()
    );
    Ok(CommandResult::success(stdout))
}
