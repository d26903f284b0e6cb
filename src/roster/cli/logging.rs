//! Logging setup using tracing + tracing-subscriber.
//!
//! Logs always go to stderr so they never mix with session output.
//! `RUST_LOG` wins when set; otherwise the level comes from `-v` flags,
//! falling back to the configured `log_level`.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity.
pub fn directive(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_env_filter(configured: &str, verbose: u8) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = directive(configured, verbose);
    EnvFilter::try_new(&directive).with_context(|| format!("invalid log level: {}", directive))
}

pub fn init_logging(configured: &str, verbose: u8, use_color: bool) -> Result<()> {
    let filter = build_env_filter(configured, verbose)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_color)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))?;

    tracing::debug!(verbose, configured, "logging initialized");
    Ok(())
}
