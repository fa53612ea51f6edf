//! Interactive loop
//!
//! Reads lines from stdin until `exit`, end of input, or Ctrl-C. The only
//! await points are the blocking read itself and the interrupt signal.

use std::io::{ErrorKind, Write};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{CommandKind, CommandResult};
use crate::shell::Shell;

const RULE: &str = "============================================================";

/// Greeting printed before the first prompt.
pub fn banner() -> String {
    let names: Vec<&str> = CommandKind::ALL.iter().map(CommandKind::name).collect();
    format!(
        "VFS emulator started\nAvailable commands: {}\n\
         Use 'list-scripts' to see the available .txt scripts\n\
         Use 'run-script <name>' to run one\n{}\n",
        names.join(", "),
        RULE
    )
}

pub fn print_result(result: &CommandResult) {
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
}

/// Write an interactive command's output, followed by a blank separator
/// line on stdout.
fn write_response(
    out: &mut impl Write,
    err: &mut impl Write,
    result: &CommandResult,
) -> std::io::Result<()> {
    out.write_all(result.stdout.as_bytes())?;
    err.write_all(result.stderr.as_bytes())?;
    err.flush()?;
    writeln!(out)
}

/// Run the interactive loop until the session stops or input ends.
pub async fn run_interactive(shell: &mut Shell) -> std::io::Result<()> {
    print!("{}", banner());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while shell.is_running() {
        print!("{}", shell.prompt());
        std::io::stdout().flush()?;

        let next = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => Ok(None),
        };
        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => {
                println!("\nExiting VFS emulator...");
                break;
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                eprintln!("\nunreadable input: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let result = shell.exec_line(&line);
        write_response(&mut std::io::stdout(), &mut std::io::stderr(), &result)?;
    }
    Ok(())
}
