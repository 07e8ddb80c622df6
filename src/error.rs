//! Error types for the Novita chat client.

use thiserror::Error;

/// Errors produced while configuring, sending, or decoding a chat completion.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP transport error (connection failure, invalid request, ...)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The API answered with a non-success status code
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// A payload could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The SSE stream broke mid-response
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Invalid or incomplete configuration, detected before any network I/O
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An attachment with a file type outside the supported image set
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Filesystem error while reading an attachment or driving the terminal
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ChatError {
    /// `true` for errors raised before any network activity.
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::UnsupportedFileType(_) | Self::IoError(_)
        )
    }
}
