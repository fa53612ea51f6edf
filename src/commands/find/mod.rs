// src/commands/find/mod.rs
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

/// Part of `path` below the search root `root`.
fn relative_to<'a>(path: &'a str, root: &str) -> &'a str {
    if root == "/" {
        path.trim_start_matches('/')
    } else {
        path.get(root.len() + 1..).unwrap_or("")
    }
}

/// `find <name> [path]`: every path below the search root whose part under
/// that root contains `name`, in tree order.
pub fn handle_find(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    let (needle, start) = match args {
        [needle] => (needle, None),
        [needle, start] => (needle, Some(start)),
        [] => return Err(ShellError::argument("find", "missing search pattern")),
        _ => return Err(ShellError::too_many_arguments("find")),
    };
    let root = shell.resolve(start.map(String::as_str).unwrap_or(""));
    let entries = shell.fs.walk(&root).map_err(|e| ShellError::fs("find", e))?;

    let mut stdout = String::new();
    for (path, kind) in entries {
        if relative_to(&path, &root).contains(needle.as_str()) {
            stdout.push_str(&format!("{:<9} {}\n", kind.label(), path));
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
        shell.fs.create_file("/docs/report.txt").unwrap();
        shell.fs.create_directory("/docs/reports").unwrap();
        shell.fs.create_file("/readme").unwrap();
        shell
    }

    #[test]
    fn test_find_from_cwd() {
        let shell = populated();
        let result = handle_find(&shell, &args(&["report"])).unwrap();
        assert_eq!(
            result.stdout,
            "file      /docs/report.txt\ndirectory /docs/reports\n"
        );
    }

    #[test]
    fn test_find_under_root_ignores_root_prefix() {
        let shell = populated();
        let result = handle_find(&shell, &args(&["docs", "/docs"])).unwrap();
        assert_eq!(result.stdout, "");
        let result = handle_find(&shell, &args(&["read", "/"])).unwrap();
        assert_eq!(result.stdout, "file      /readme\n");
    }

    #[test]
    fn test_find_bad_root() {
        let shell = populated();
        let err = handle_find(&shell, &args(&["x", "/readme"])).unwrap_err();
        assert_eq!(err.to_string(), "find: '/readme': Not a directory");
        let err = handle_find(&shell, &args(&["x", "/nope"])).unwrap_err();
        assert_eq!(err.to_string(), "find: '/nope': No such file or directory");
    }

    #[test]
    fn test_find_arg_count() {
        let shell = populated();
        assert!(handle_find(&shell, &[]).is_err());
        assert_eq!(
            handle_find(&shell, &args(&["a", "b", "c"])).unwrap_err(),
            ShellError::too_many_arguments("find")
        );
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(relative_to("/a/b", "/"), "a/b");
        assert_eq!(relative_to("/a/b", "/a"), "b");
    }
}
