//! Error types for the counter widget core

use thiserror::Error;

/// Errors reported to the host surface.
///
/// Bound violations are never errors; they are corrected during
/// reconciliation. These only cover input the widget cannot interpret.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// An attribute value could not be converted to its property type
    #[error("Invalid value for attribute `{name}`: {reason}")]
    InvalidAttribute { name: String, reason: String },

    /// The host wrote an attribute the widget does not observe
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A locale resource could not be loaded
    #[error("Locale error: {0}")]
    Locale(String),
}

/// Result type alias for counter operations
pub type CounterResult<T> = Result<T, CounterError>;
