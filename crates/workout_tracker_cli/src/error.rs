//! Error types for the command-line front end.

use thiserror::Error;

/// Errors raised while turning user input into reports.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Tracker error: {0}")]
    Tracker(#[from] workout_tracker_core::TrackerError),

    #[error("Build error: {0}")]
    Build(#[from] workout_tracker_core::BuildError),

    #[error("Invalid package: {0}")]
    Package(#[from] PackageParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed `TAG:v1,v2,...` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageParseError {
    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),

    #[error("empty tag in {0:?}")]
    EmptyTag(String),

    #[error("empty value slot in {0:?}")]
    EmptyValue(String),

    #[error("value {value:?} in {package:?} is not a number")]
    InvalidNumber { package: String, value: String },
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
