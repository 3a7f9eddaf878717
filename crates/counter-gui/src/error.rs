//! Error types for the counter GUI

use thiserror::Error;

/// GUI-related errors
#[derive(Debug, Error)]
pub enum GuiError {
    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// A design token override could not be applied
    #[error("Invalid design token `{name}`: {reason}")]
    Token { name: String, reason: String },

    /// Iced backend error
    #[error("Iced error: {0}")]
    Iced(String),
}

/// Result type alias for GUI operations
pub type GuiResult<T> = Result<T, GuiError>;
