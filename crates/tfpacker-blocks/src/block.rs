//! Extracted block type

use std::path::{Path, PathBuf};

use crate::classify::Classification;

/// A top-level declaration cut verbatim out of a source document.
///
/// Blocks are immutable once scanned; the content is exactly the source
/// bytes from the keyword through the closing brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    class: Classification,
    source_file: PathBuf,
    content: Vec<u8>,
}

impl Block {
    pub fn new(
        class: Classification,
        source_file: impl Into<PathBuf>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            class,
            source_file: source_file.into(),
            content: content.into(),
        }
    }

    pub fn classification(&self) -> &Classification {
        &self.class
    }

    pub fn block_type(&self) -> &str {
        &self.class.block_type
    }

    pub fn subtype(&self) -> &str {
        &self.class.subtype
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }

    /// File the block was read from.
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}
