//! Command Dispatch
//!
//! Maps a parsed command kind to its handler and turns handler errors into
//! diagnostics.

use crate::commands::types::{CommandKind, CommandResult};
use crate::errors::ShellError;
use crate::shell::Shell;

use super::cat::handle_cat;
use super::cd_cmd::handle_cd;
use super::conf_dump_cmd::handle_conf_dump;
use super::exit_cmd::handle_exit;
use super::find::handle_find;
use super::history_cmd::handle_history;
use super::list_scripts_cmd::handle_list_scripts;
use super::ls::handle_ls;
use super::mkdir::handle_mkdir;
use super::pwd::handle_pwd;
use super::run_script_cmd::handle_run_script;
use super::tac_cmd::handle_tac;
use super::touch::handle_touch;

/// Run one command against the session.
pub fn dispatch(shell: &mut Shell, kind: CommandKind, args: &[String]) -> CommandResult {
    log::debug!("dispatch {} {:?}", kind, args);
    let outcome: Result<CommandResult, ShellError> = match kind {
        CommandKind::Exit => handle_exit(shell, args),
        CommandKind::Pwd => handle_pwd(shell, args),
        CommandKind::Ls => handle_ls(shell, args),
        CommandKind::Cd => handle_cd(shell, args),
        CommandKind::Mkdir => handle_mkdir(shell, args),
        CommandKind::Touch => handle_touch(shell, args),
        CommandKind::Cat => handle_cat(shell, args),
        CommandKind::Tac => handle_tac(shell, args),
        CommandKind::Find => handle_find(shell, args),
        CommandKind::History => handle_history(shell, args),
        CommandKind::ConfDump => handle_conf_dump(shell, args),
        CommandKind::ListScripts => handle_list_scripts(shell, args),
        CommandKind::RunScript => handle_run_script(shell, args),
    };
    outcome.unwrap_or_else(|e| {
        log::debug!("{} failed: {}", kind, e);
        e.into()
    })
}
