//! Error types for tfpacker-core

/// Result type for tfpacker-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tfpacker-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating or writing a destination file failed
    #[error("Failed to write file {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: tfpacker_fs::Error,
    },

    /// Filesystem error from tfpacker-fs
    #[error(transparent)]
    Fs(#[from] tfpacker_fs::Error),
}
