use crate::config::{InputSource, RunConfig};
use anyhow::{Context, Result};
use ctap_engine::{RunReport, process_reader};
use std::fs::File;
use std::io::{self, BufReader, Write};

/// Colourise the configured TAP input onto `out`.
pub fn handle<W: Write>(config: &RunConfig, out: W) -> Result<RunReport> {
    let report = match &config.input {
        InputSource::Stdin => {
            tracing::debug!("reading TAP from standard input");
            let stdin = io::stdin();
            process_reader(stdin.lock(), &config.styles, &config.options, out)?
        }
        InputSource::File(path) => {
            tracing::debug!(path = %path.display(), "reading TAP file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open TAP file: {}", path.display()))?;
            process_reader(BufReader::new(file), &config.styles, &config.options, out)?
        }
    };

    tracing::info!(
        tests = report.tests_seen,
        failures = report.failures.len(),
        exit_code = report.exit_code.code(),
        passed = report.exit_code.is_success(),
        "run finished"
    );

    Ok(report)
}
