//! Error types for tfpacker-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tfpacker-core
    #[error(transparent)]
    Core(#[from] tfpacker_core::Error),

    /// Error from tfpacker-config
    #[error(transparent)]
    Config(#[from] tfpacker_config::Error),

    /// Error from tfpacker-fs
    #[error(transparent)]
    Fs(#[from] tfpacker_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
