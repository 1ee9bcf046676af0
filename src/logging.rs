//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after settings are resolved and the
//! directory layout exists. Log lines carry timestamp, level, and target
//! and are written to both the audit log file and the console.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::error::ConfigError;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// `level` accepts standard level names (`error`, `warn`, `info`, `debug`,
/// `trace`) in any case; unrecognised names fall back to `info`. `RUST_LOG`
/// directives can still refine the filter per target. The log file is
/// opened in append mode.
pub fn init(level: &str, log_file: &Path) -> Result<(), ConfigError> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_or_info(level).into())
        .from_env_lossy();

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}

/// Parse a log level name, falling back to `info` on unrecognised values.
fn level_or_info(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_levels_parse() {
        assert_eq!(level_or_info("error"), LevelFilter::ERROR);
        assert_eq!(level_or_info("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(level_or_info("Trace"), LevelFilter::TRACE);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        assert_eq!(level_or_info("verbose"), LevelFilter::INFO);
        assert_eq!(level_or_info(""), LevelFilter::INFO);
    }
}
