// src/commands/cat/mod.rs
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

/// Read each named file, keeping going past failures. Every file's content
/// ends with a newline in the output.
pub(crate) fn for_each_file<F>(
    shell: &Shell,
    command: &'static str,
    args: &[String],
    mut render: F,
) -> Result<CommandResult, ShellError>
where
    F: FnMut(&str) -> String,
{
    if args.is_empty() {
        return Err(ShellError::argument(command, "missing file operand"));
    }

    let mut stdout = String::new();
    let mut stderr = String::new();
    let mut exit_code = 0;

    for file in args {
        let path = shell.resolve(file);
        match shell.fs.read_file(&path) {
            Ok(content) => {
                let rendered = render(content);
                stdout.push_str(&rendered);
                if !rendered.is_empty() && !rendered.ends_with('\n') {
                    stdout.push('\n');
                }
            }
            Err(e) => {
                stderr.push_str(&format!("{}\n", ShellError::fs(command, e)));
                exit_code = 1;
            }
        }
    }

    Ok(CommandResult::with_exit_code(stdout, stderr, exit_code))
}

pub fn handle_cat(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    for_each_file(shell, "cat", args, |content| content.to_string())
}
