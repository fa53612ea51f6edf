use crate::commands::cat::for_each_file;
use crate::commands::CommandResult;
use crate::errors::ShellError;
use crate::shell::Shell;

fn reverse_lines(content: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines.reverse();

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

pub fn handle_tac(shell: &Shell, args: &[String]) -> Result<CommandResult, ShellError> {
    for_each_file(shell, "tac", args, reverse_lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::make_shell;

    #[test]
    fn test_reverse_lines() {
        assert_eq!(reverse_lines("line1\nline2\nline3\n"), "line3\nline2\nline1\n");
        assert_eq!(reverse_lines("a\nb"), "b\na\n");
        assert_eq!(reverse_lines(""), "");
    }

    #[test]
    fn test_tac_files() {
        let mut shell = make_shell();
        shell.fs.write_file("/a", "1\n2\n").unwrap();
        shell.fs.write_file("/b", "x\ny\n").unwrap();
        let result = handle_tac(&shell, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(result.stdout, "2\n1\ny\nx\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_tac_file_not_found() {
        let shell = make_shell();
        let result = handle_tac(&shell, &["nonexistent.txt".to_string()]).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("No such file"));
    }
}
