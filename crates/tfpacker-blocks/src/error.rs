//! Error types for tfpacker-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid start offset {offset} for source of {len} bytes")]
    InvalidOffset { offset: usize, len: usize },

    #[error("Opening brace not found after offset {offset}")]
    OpenBraceNotFound { offset: usize },

    #[error("Closing brace not found for block opened at offset {offset}")]
    CloseBraceNotFound { offset: usize },

    #[error("Syntax error: {message}")]
    Syntax { message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
