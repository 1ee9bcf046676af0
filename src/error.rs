//! Typed errors for configuration loading and validation.

use thiserror::Error;

/// Errors raised while resolving or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment variable held a value that does not parse.
    #[error("invalid value for {name}: {value:?} is not a valid integer")]
    MalformedSetting { name: &'static str, value: String },

    /// One or more mandatory credentials are absent.
    ///
    /// Carries all missing-credential messages joined together, so a single
    /// run surfaces every problem at once.
    #[error("configuration errors: {0}")]
    MissingCredentials(String),

    /// Filesystem failure while establishing directories or the log file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
