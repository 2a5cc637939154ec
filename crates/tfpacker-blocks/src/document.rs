//! Grammar parser seam.
//!
//! The scanner only needs to know where each top-level block starts and
//! what its keyword and labels are. [`DocumentParser`] captures that
//! contract; [`HclDocumentParser`] fulfils it with `hcl-edit`.

use hcl_edit::Span;
use hcl_edit::parser::parse_body;

use crate::{Error, Result};

/// Position and identity of a top-level block as reported by a parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block keyword (`resource`, `locals`, ...)
    pub block_type: String,
    /// Labels in declaration order, unquoted
    pub labels: Vec<String>,
    /// Byte offset of the keyword in the document
    pub start: usize,
}

impl BlockHeader {
    pub fn new(block_type: impl Into<String>, labels: Vec<String>, start: usize) -> Self {
        Self {
            block_type: block_type.into(),
            labels,
            start,
        }
    }
}

/// Reports the top-level blocks of a document in source order.
pub trait DocumentParser {
    /// Parse `source` and list its top-level blocks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the document is not well-formed.
    fn parse(&self, source: &str) -> Result<Vec<BlockHeader>>;
}

/// [`DocumentParser`] for native HCL syntax, backed by `hcl-edit`.
///
/// Top-level attributes (`key = value` outside any block) are valid HCL but
/// are not blocks; they are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HclDocumentParser;

impl HclDocumentParser {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for HclDocumentParser {
    fn parse(&self, source: &str) -> Result<Vec<BlockHeader>> {
        let body = parse_body(source).map_err(|e| Error::Syntax {
            message: e.to_string(),
        })?;

        let mut headers = Vec::new();
        for structure in body.iter() {
            let Some(block) = structure.as_block() else {
                tracing::debug!("Ignoring top-level attribute");
                continue;
            };

            let block_type = block.ident.value().as_str();
            let start = block
                .ident
                .span()
                .or_else(|| block.span())
                .map(|span| span.start)
                .ok_or_else(|| Error::Syntax {
                    message: format!("no source position for '{}' block", block_type),
                })?;

            let labels = block
                .labels
                .iter()
                .map(|label| label.as_str().to_string())
                .collect();

            headers.push(BlockHeader::new(block_type, labels, start));
        }

        Ok(headers)
    }
}
