use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for `--print-config` and `check`.
///
/// Filter precedence: `RUST_LOG`, then `-v` count, then `logging.console_level`.
///
/// # Errors
/// Returns an error if the configured level is not a valid filter or a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = resolve_filter(config, verbose, std::env::var("RUST_LOG").ok())?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Text => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn resolve_filter(config: &LoggingConfig, verbose: u8, rust_log: Option<String>) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return Ok(EnvFilter::try_new(directives)?);
    }
    let level = match verbose {
        0 => config.console_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))
}
