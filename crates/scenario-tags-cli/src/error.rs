//! Error types for the command-line front end.

use scenario_tags::TagExprError;
use thiserror::Error;

/// Failures that stop the command before a result is reported.
#[derive(Debug, Error)]
pub enum CliError {
    /// The supplied tag expressions could not be compiled.
    #[error("invalid tag expression: {0}")]
    Expression(#[from] TagExprError),

    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
