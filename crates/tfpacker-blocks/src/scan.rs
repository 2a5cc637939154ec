//! Per-document scanning: parse, classify, extract.

use std::path::Path;

use tfpacker_fs::{NormalizedPath, io};

use crate::block::Block;
use crate::classify::classify;
use crate::document::DocumentParser;
use crate::extract::extract;
use crate::{Error, Result};

/// Scan one document and return its relocatable blocks in source order.
///
/// Blocks whose labels do not fit their kind are skipped silently. If
/// extraction fails for a block, the failure is logged and the remaining
/// blocks of the document are abandoned; blocks extracted before it are
/// kept.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the source is not UTF-8 or the parser rejects
/// it.
pub fn scan_document(
    path: &Path,
    source: &[u8],
    parser: &dyn DocumentParser,
) -> Result<Vec<Block>> {
    let text = std::str::from_utf8(source).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: format!("source is not valid UTF-8: {}", e),
    })?;

    let headers = parser.parse(text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Found {} blocks in {}", headers.len(), path.display());

    let mut blocks = Vec::with_capacity(headers.len());
    for header in headers {
        tracing::debug!(
            "Processing block: {} with {} labels",
            header.block_type,
            header.labels.len()
        );

        let Some(class) = classify(&header.block_type, &header.labels) else {
            tracing::debug!("Skipping '{}' block with missing labels", header.block_type);
            continue;
        };

        let content = match extract(source, header.start) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(
                    "Failed to extract '{}' block in {}: {}; skipping the rest of the file",
                    class,
                    path.display(),
                    e
                );
                break;
            }
        };

        tracing::debug!("Added block: {}", class);
        blocks.push(Block::new(class, path, content));
    }

    Ok(blocks)
}

/// Read `path` and scan it with [`scan_document`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the file cannot be read or parsed.
pub fn scan_file(path: &Path, parser: &dyn DocumentParser) -> Result<Vec<Block>> {
    let source = io::read_bytes(&NormalizedPath::new(path)).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    scan_document(path, &source, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockHeader, HclDocumentParser};

    /// Parser returning canned headers, for driving extraction failures.
    struct FixedParser(Vec<BlockHeader>);

    impl DocumentParser for FixedParser {
        fn parse(&self, _source: &str) -> Result<Vec<BlockHeader>> {
            Ok(self.0.clone())
        }
    }

    fn scan_text(source: &str) -> Vec<Block> {
        scan_document(Path::new("main.tf"), source.as_bytes(), &HclDocumentParser).unwrap()
    }

    #[test]
    fn test_scan_preserves_source_bytes() {
        let source = concat!(
            "variable \"a\" {\n  type    =   string   # odd spacing\n}\n",
            "\n\nlocals {\n\tx = 1\n}\n",
        );
        let blocks = scan_text(source);

        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].content(),
            b"variable \"a\" {\n  type    =   string   # odd spacing\n}"
        );
        assert_eq!(blocks[1].content(), b"locals {\n\tx = 1\n}");
        assert_eq!(blocks[1].source_file(), Path::new("main.tf"));
    }

    #[test]
    fn test_scan_skips_blocks_missing_labels() {
        let source = "resource \"aws_vpc\" {\n}\n\noutput \"id\" {\n  value = 1\n}\n";
        let blocks = scan_text(source);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block_type(), "output");
        assert_eq!(blocks[0].name(), "id");
    }

    #[test]
    fn test_extraction_failure_abandons_rest_of_file() {
        let source = b"locals { a = 1 }\nbroken\nlocals { b = 2 }";
        let parser = FixedParser(vec![
            BlockHeader::new("locals", vec![], 0),
            BlockHeader::new("locals", vec![], 500),
            BlockHeader::new("locals", vec![], 24),
        ]);

        let blocks = scan_document(Path::new("x.tf"), source, &parser).unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content(), b"locals { a = 1 }");
    }

    #[test]
    fn test_parse_failure_names_the_file() {
        let err =
            scan_document(Path::new("bad.tf"), b"resource {", &HclDocumentParser).unwrap_err();
        match err {
            Error::Parse { path, .. } => assert_eq!(path, Path::new("bad.tf")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_failure() {
        let source = [0xff, 0xfe, b'{'];
        let err = scan_document(Path::new("bin.tf"), &source, &HclDocumentParser).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
