//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// uxaudit - configuration check for the UX AI audit pipeline
///
/// Resolves all settings from the environment, establishes the data and
/// log directories, and validates that the required LLM credentials are
/// present before a full audit run is started.
///
/// Examples:
///   uxaudit
///   uxaudit --root /srv/audit --show
///   uxaudit --env-file staging.env --show --format json
///   uxaudit --verbose
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Root directory for data and log storage
    ///
    /// Screenshots, reports, and logs are created below this directory.
    #[arg(long, value_name = "DIR", default_value = ".", env = "UXAUDIT_ROOT")]
    pub root: PathBuf,

    /// Path to an env override file
    ///
    /// If not specified, a .env file in the current directory is loaded
    /// when present.
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Print the resolved settings after validation
    ///
    /// Credential values are shown as set/not-set only.
    #[arg(long)]
    pub show: bool,

    /// Output format for --show (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for --show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate env file if provided
        if let Some(ref env_file) = self.env_file {
            if !env_file.exists() {
                return Err(format!("Env file does not exist: {}", env_file.display()));
            }
            if !env_file.is_file() {
                return Err(format!("Env file is not a file: {}", env_file.display()));
            }
        }

        Ok(())
    }

    /// Returns the effective log level name, honoring verbosity flags over
    /// the configured LOG_LEVEL.
    pub fn log_level(&self, configured: &str) -> String {
        if self.quiet {
            "error".to_string()
        } else if self.verbose {
            "debug".to_string()
        } else {
            configured.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            root: PathBuf::from("."),
            env_file: None,
            show: false,
            format: OutputFormat::Text,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_env_file() {
        let mut args = make_args();
        args.env_file = Some(PathBuf::from("/nonexistent/override.env"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level("INFO"), "INFO");

        args.verbose = true;
        assert_eq!(args.log_level("INFO"), "debug");

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level("INFO"), "error");
    }
}
