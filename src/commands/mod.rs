// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod conf_dump_cmd;
pub mod dispatch;
pub mod exit_cmd;
pub mod find;
pub mod history_cmd;
pub mod list_scripts_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod run_script_cmd;
pub mod tac_cmd;
pub mod touch;
pub mod types;

pub use dispatch::dispatch;
pub use types::{CommandKind, CommandResult};
