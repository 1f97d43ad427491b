use super::args::Cli;
use super::handlers;
use crate::config::{RunConfig, StyleError};
use anyhow::Result;
use ctap_engine::ExitCode;
use is_terminal::IsTerminal;
use std::io;

/// Exit status for command line and colour configuration problems.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Exit status for anything else that stops a run early (unreadable input etc).
pub const FAILURE_EXIT_CODE: i32 = 1;

pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.version {
        println!("ctap {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::Ok);
    }

    let in_ci = std::env::var_os("CI").is_some();
    let color_enabled = cli.color.enabled(io::stdout().is_terminal(), in_ci);
    tracing::debug!(color = %cli.color, color_enabled, in_ci, "resolved colour mode");

    let config = RunConfig::from_cli(&cli, color_enabled)?;

    let stdout = io::stdout();
    let report = handlers::colourise::handle(&config, stdout.lock())?;
    Ok(report.exit_code)
}

/// Exit status for an error returned by [`run`].
pub fn error_exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<StyleError>().is_some() {
        USAGE_EXIT_CODE
    } else {
        FAILURE_EXIT_CODE
    }
}

/// Whether `err` is only the reader of our output going away.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ctap_engine::Error>()
        .is_some_and(ctap_engine::Error::is_broken_pipe)
}
