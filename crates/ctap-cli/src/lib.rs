// CLI module - flags, colour configuration and terminal output for ctap
// TAP classification and the run state machine live in ctap-engine

mod args;
mod commands;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, ColourArgs, DisplayArgs};
pub use commands::{FAILURE_EXIT_CODE, USAGE_EXIT_CODE, error_exit_code, is_broken_pipe, run};
