// src/commands/ls/mod.rs
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::fs::{path, Node};
use crate::shell::Shell;

fn format_mode(node: &Node) -> &'static str {
    if node.is_directory() {
        "drwxr-xr-x"
    } else {
        "-rw-r--r--"
    }
}

fn format_long(node: &Node, name: &str) -> String {
    format!(
        "{} 1 user user {:>6} {} {}\n",
        format_mode(node),
        node.size(),
        node.mtime().format("%b %e %H:%M"),
        name
    )
}

/// `ls [-l] [path]` in any order.
pub fn handle_ls(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    let mut long_format = false;
    let mut paths: Vec<&str> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-l" => long_format = true,
            a if a.starts_with('-') && a.len() > 1 => {
                return Err(ShellError::argument("ls", format!("invalid option -- '{}'", &a[1..])));
            }
            a => paths.push(a),
        }
    }
    if paths.len() > 1 {
        return Err(ShellError::too_many_arguments("ls"));
    }

    let target = shell.resolve(paths.first().copied().unwrap_or(""));
    let children = shell.fs.list_children(&target).map_err(|e| ShellError::fs("ls", e))?;

    let mut stdout = String::new();
    for name in children {
        let Some(node) = shell.fs.get(&path::join(&target, name)) else {
            continue;
        };
        if long_format {
            stdout.push_str(&format_long(node, name));
        } else if node.is_directory() {
            stdout.push_str(&format!("{}/\n", name));
        } else {
            stdout.push_str(&format!("{}\n", name));
        }
    }

    Ok(CommandResult::success(stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::make_shell;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn populated() -> Shell {
        let mut shell = make_shell();
        shell.fs.create_directory("/docs").unwrap();
        shell.fs.write_file("/notes.txt", "hello").unwrap();
        shell.fs.create_file("/docs/inner.txt").unwrap();
        shell
    }

    #[test]
    fn test_ls_current_in_creation_order() {
        let shell = populated();
        let result = handle_ls(&shell, &[]).unwrap();
        assert_eq!(result.stdout, "docs/\nnotes.txt\n");
    }

    #[test]
    fn test_ls_path_argument() {
        let shell = populated();
        let result = handle_ls(&shell, &args(&["docs"])).unwrap();
        assert_eq!(result.stdout, "inner.txt\n");
    }

    #[test]
    fn test_ls_long_flag_in_any_position() {
        let shell = populated();
        for a in [args(&["-l", "/"]), args(&["/", "-l"])] {
            let result = handle_ls(&shell, &a).unwrap();
            let lines: Vec<&str> = result.stdout.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].starts_with("drwxr-xr-x 1 user user   4096 "));
            assert!(lines[0].ends_with(" docs"));
            assert!(lines[1].starts_with("-rw-r--r-- 1 user user      5 "));
            assert!(lines[1].ends_with(" notes.txt"));
        }
    }

    #[test]
    fn test_ls_empty_directory() {
        let shell = make_shell();
        assert_eq!(handle_ls(&shell, &[]).unwrap().stdout, "");
    }

    #[test]
    fn test_ls_errors() {
        let shell = populated();
        let err = handle_ls(&shell, &args(&["notes.txt"])).unwrap_err();
        assert_eq!(err.to_string(), "ls: '/notes.txt': Not a directory");

        let err = handle_ls(&shell, &args(&["missing"])).unwrap_err();
        assert_eq!(err.to_string(), "ls: '/missing': No such file or directory");

        let err = handle_ls(&shell, &args(&["a", "b"])).unwrap_err();
        assert_eq!(err, ShellError::too_many_arguments("ls"));

        let err = handle_ls(&shell, &args(&["-x"])).unwrap_err();
        assert_eq!(err.to_string(), "ls: invalid option -- 'x'");
    }
}
