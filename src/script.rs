//! Script execution
//!
//! Runs a script line by line through a shell session. Blank lines are
//! skipped, `#` lines are echoed as comments, and every other line counts as
//! one success or one error. Errors never stop the script.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::ShellError;
use crate::shell::Shell;

const RULE: &str = "==================================================";

/// Counts and transcript of one script run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScriptReport {
    pub script: String,
    pub successes: usize,
    pub errors: usize,
    #[serde(skip)]
    pub transcript: String,
}

impl ScriptReport {
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Drives the lines of one script through a session.
pub struct ScriptRunner<'a> {
    shell: &'a mut Shell,
    report: ScriptReport,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(shell: &'a mut Shell, script: impl Into<String>) -> Self {
        let report = ScriptReport { script: script.into(), ..Default::default() };
        Self { shell, report }
    }

    pub fn run_source(mut self, source: &str) -> ScriptReport {
        log::info!("running script {}", self.report.script);
        self.report.transcript.push_str(&format!("Running script: {}\n{}\n", self.report.script, RULE));

        for (idx, raw) in source.lines().enumerate() {
            self.run_line(idx + 1, raw.trim());
        }

        let report = &mut self.report;
        report.transcript.push_str(&format!(
            "{}\nScript '{}' finished:\n  succeeded: {}\n  failed: {}\n",
            RULE, report.script, report.successes, report.errors
        ));
        log::info!(
            "script {} finished: {} succeeded, {} failed",
            report.script,
            report.successes,
            report.errors
        );
        self.report
    }

    fn run_line(&mut self, number: usize, line: &str) {
        if line.is_empty() {
            return;
        }
        if let Some(comment) = line.strip_prefix('#') {
            self.report.transcript.push_str(&format!("# {}\n", comment.trim()));
            return;
        }

        let echo = format!("[line {}] {}{}\n", number, self.shell.prompt(), line);
        self.report.transcript.push_str(&echo);

        let result = self.shell.exec_line(line);
        let transcript = &mut self.report.transcript;
        transcript.push_str(&result.stdout);
        transcript.push_str(&result.stderr);
        if result.is_success() {
            self.report.successes += 1;
        } else {
            self.report.errors += 1;
            transcript.push_str(&format!("ERROR at line {}\n", number));
        }
        transcript.push('\n');
    }
}

/// Append `.txt` unless the name already carries it.
pub fn with_txt_extension(name: &str) -> String {
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

/// Location of a script named on the command line of `run-script`.
pub fn script_path(scripts_dir: &Path, name: &str) -> PathBuf {
    let name = with_txt_extension(name);
    let path = Path::new(&name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        scripts_dir.join(path)
    }
}

/// Names of the `*.txt` files in `dir`.
pub fn list_scripts(dir: &Path) -> Result<Vec<String>, ShellError> {
    let pattern = format!("{}/*.txt", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries = glob::glob(&pattern)
        .map_err(|e| ShellError::script("list-scripts", format!("bad scripts directory: {}", e)))?;

    let mut scripts = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                if let Some(name) = path.file_name() {
                    scripts.push(name.to_string_lossy().into_owned());
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("cannot inspect {}: {}", e.path().display(), e.error()),
        }
    }
    Ok(scripts)
}
