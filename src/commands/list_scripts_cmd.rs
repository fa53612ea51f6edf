//! list-scripts - Show the `*.txt` scripts available to `run-script`

use std::path::Path;

use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::script::list_scripts;
use crate::shell::Shell;

const RULE: &str = "----------------------------------------";

/// Numbered listing of the scripts in `dir`.
pub fn render_script_list(dir: &Path) -> Result<String, ShellError> {
    Ok(render(&list_scripts(dir)?))
}

/// Listing followed by a total, as printed by `--list-scripts`.
pub fn render_script_catalog(dir: &Path) -> Result<String, ShellError> {
    let scripts = list_scripts(dir)?;
    Ok(format!("{}Total scripts: {}\n", render(&scripts), scripts.len()))
}

fn render(scripts: &[String]) -> String {
    let mut out = format!("Available scripts (*.txt):\n{}\n", RULE);
    if scripts.is_empty() {
        out.push_str("  no scripts found\n");
        out.push_str("  create .txt files with one command per line in this directory\n");
    } else {
        for (i, script) in scripts.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, script));
        }
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn handle_list_scripts(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    if !args.is_empty() {
        return Err(ShellError::too_many_arguments("list-scripts"));
    }
    Ok(CommandResult::success(render_script_list(&shell.options().scripts_dir)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellOptions;
    use crate::fs::VirtualFs;
    use crate::shell::VfsSource;
    use std::fs;
    use tempdir::TempDir;

    fn shell_in(dir: &Path) -> Shell {
        let options = ShellOptions { scripts_dir: dir.to_path_buf(), ..Default::default() };
        Shell::with_fs(VirtualFs::new(), options, VfsSource::Default)
    }

    #[test]
    fn test_lists_numbered_scripts() {
        let tmp = TempDir::new("vfs-list").unwrap();
        fs::write(tmp.path().join("setup.txt"), "pwd\n").unwrap();
        fs::write(tmp.path().join("demo.txt"), "ls\n").unwrap();
        let result = handle_list_scripts(&shell_in(tmp.path()), &[]).unwrap();
        assert!(result.stdout.contains("  1. demo.txt\n  2. setup.txt\n"));
    }

    #[test]
    fn test_no_scripts() {
        let tmp = TempDir::new("vfs-list").unwrap();
        let result = handle_list_scripts(&shell_in(tmp.path()), &[]).unwrap();
        assert!(result.stdout.contains("no scripts found"));
    }

    #[test]
    fn test_catalog_prints_total() {
        let tmp = TempDir::new("vfs-list").unwrap();
        fs::write(tmp.path().join("a.txt"), "pwd\n").unwrap();
        fs::write(tmp.path().join("b.txt"), "ls\n").unwrap();
        fs::write(tmp.path().join("notes.md"), "x").unwrap();
        let out = render_script_catalog(tmp.path()).unwrap();
        assert!(out.starts_with("Available scripts (*.txt):\n"));
        assert!(out.ends_with(&format!("{}\nTotal scripts: 2\n", RULE)));

        let empty = TempDir::new("vfs-list").unwrap();
        assert!(render_script_catalog(empty.path()).unwrap().ends_with("Total scripts: 0\n"));
    }

    #[test]
    fn test_rejects_args() {
        let tmp = TempDir::new("vfs-list").unwrap();
        assert!(handle_list_scripts(&shell_in(tmp.path()), &["x".to_string()]).is_err());
    }
}
