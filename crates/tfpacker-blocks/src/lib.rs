//! Top-level block scanning and extraction for tfpacker.
//!
//! A Terraform document is a sequence of top-level blocks:
//!
//! ```text
//! resource "aws_s3_bucket" "logs" {
//!   bucket = "logs"
//!   versioning { enabled = true }
//! }
//! ```
//!
//! Scanning a document happens in three steps:
//!
//! 1. a [`DocumentParser`] reports each block's keyword, labels and the byte
//!    offset where its declaration starts,
//! 2. [`classify`] turns keyword and labels into the routing triple
//!    (type, subtype, name), or rejects the block,
//! 3. [`extract`] cuts the verbatim block text out of the source by
//!    balancing braces from the start offset.
//!
//! The result is a list of [`Block`]s whose content is byte-identical to
//! the source.

pub mod block;
pub mod classify;
pub mod document;
pub mod error;
pub mod extract;
pub mod scan;

pub use block::Block;
pub use classify::{Classification, classify};
pub use document::{BlockHeader, DocumentParser, HclDocumentParser};
pub use error::{Error, Result};
pub use extract::extract;
pub use scan::{scan_document, scan_file};
