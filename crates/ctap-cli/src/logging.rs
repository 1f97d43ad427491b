use crate::types::LogLevel;
use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` directives win over `level`, which only sets the default.
pub fn init_tracing(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_filter().into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
