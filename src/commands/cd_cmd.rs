//! cd - Change directory
//!
//! With no argument goes to `/`. `..` at the root stays at the root.

use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::fs::{FsError, NodeKind};
use crate::shell::Shell;

/// Handle the cd command
pub fn handle_cd(shell: &mut Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    if args.len() > 1 {
        return Err(ShellError::too_many_arguments("cd"));
    }
    let target = match args.first() {
        Some(raw) => shell.resolve(raw),
        None => "/".to_string(),
    };
    match shell.fs.kind_of(&target).map_err(|e| ShellError::fs("cd", e))? {
        NodeKind::Directory => {
            shell.set_cwd(target);
            Ok(CommandResult::ok())
        }
        NodeKind::File => Err(ShellError::fs("cd", FsError::not_a_directory(target))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::make_shell;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cd_relative_and_absolute() {
        let mut shell = make_shell();
        shell.fs.create_directory("/a").unwrap();
        shell.fs.create_directory("/a/b").unwrap();

        handle_cd(&mut shell, &args(&["a"])).unwrap();
        assert_eq!(shell.cwd(), "/a");
        handle_cd(&mut shell, &args(&["b"])).unwrap();
        assert_eq!(shell.cwd(), "/a/b");
        handle_cd(&mut shell, &args(&["/a"])).unwrap();
        assert_eq!(shell.cwd(), "/a");
    }

    #[test]
    fn test_cd_no_args_goes_to_root() {
        let mut shell = make_shell();
        shell.fs.create_directory("/a").unwrap();
        handle_cd(&mut shell, &args(&["a"])).unwrap();
        handle_cd(&mut shell, &[]).unwrap();
        assert_eq!(shell.cwd(), "/");
    }

    #[test]
    fn test_cd_parent_at_root_is_noop() {
        let mut shell = make_shell();
        let result = handle_cd(&mut shell, &args(&[".."])).unwrap();
        assert!(result.is_success());
        assert_eq!(shell.cwd(), "/");
    }

    #[test]
    fn test_cd_missing_target() {
        let mut shell = make_shell();
        let err = handle_cd(&mut shell, &args(&["nowhere"])).unwrap_err();
        assert_eq!(err.to_string(), "cd: '/nowhere': No such file or directory");
        assert_eq!(shell.cwd(), "/");
    }

    #[test]
    fn test_cd_into_file() {
        let mut shell = make_shell();
        shell.fs.create_file("/f").unwrap();
        let err = handle_cd(&mut shell, &args(&["f"])).unwrap_err();
        assert_eq!(err.to_string(), "cd: '/f': Not a directory");
        assert_eq!(shell.cwd(), "/");
    }

    #[test]
    fn test_cd_too_many_args() {
        let mut shell = make_shell();
        let err = handle_cd(&mut shell, &args(&["a", "b"])).unwrap_err();
        assert_eq!(err, ShellError::too_many_arguments("cd"));
    }
}
