//! Error types for writegood-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building or running a checker.
///
/// Malformed user-supplied word lists surface here at checker construction,
/// when the combined pattern is handed to the regex engine. This is a
/// configuration-time failure: a checker that constructed successfully cannot
/// fail during a scan.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A word list produced a pattern the regex engine rejected.
    #[error("invalid {checker} pattern: {source}")]
    Pattern {
        /// Which checker the pattern belongs to.
        checker: &'static str,
        /// The underlying regex syntax error.
        #[source]
        source: Box<regex::Error>,
    },

    /// The duplicate-word backreference pattern failed to compile or the
    /// backtracking engine gave up mid-scan.
    #[error("duplicate-word scan failed: {0}")]
    Backref(#[from] Box<fancy_regex::Error>),
}

impl CheckError {
    /// Wrap a regex syntax error with the owning checker's name.
    pub fn pattern(checker: &'static str, source: regex::Error) -> Self {
        Self::Pattern {
            checker,
            source: Box::new(source),
        }
    }
}

/// Result type alias using [`CheckError`].
pub type CheckResult<T> = Result<T, CheckError>;
