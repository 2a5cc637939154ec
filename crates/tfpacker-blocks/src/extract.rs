//! Verbatim block extraction by brace balancing.
//!
//! The scan is byte-level and knows nothing about string literals,
//! heredocs or comments: a `{` or `}` inside `"..."` is counted like any
//! other. The parser has already accepted the document, so unbalanced
//! braces inside strings are rare, but a block such as
//!
//! ```text
//! locals { open = "{" }
//! ```
//!
//! is reported as [`Error::CloseBraceNotFound`] (or cut short when a later
//! block closes the count).

use crate::{Error, Result};

/// Return the source text of the block declared at `start`.
///
/// The slice runs from `start` through the `}` that balances the first `{`
/// found at or after `start`, so it includes the keyword, the labels and
/// both braces.
///
/// # Errors
///
/// - [`Error::InvalidOffset`] if `start` is not inside `source`
/// - [`Error::OpenBraceNotFound`] if no `{` follows `start`
/// - [`Error::CloseBraceNotFound`] if the braces never balance
///
/// # Example
/// ```
/// use tfpacker_blocks::extract;
///
/// let source = b"variable \"region\" {\n  default = \"eu\"\n}\n\nlocals {}";
/// let block = extract(source, 0).unwrap();
/// assert_eq!(block, b"variable \"region\" {\n  default = \"eu\"\n}");
/// ```
pub fn extract(source: &[u8], start: usize) -> Result<&[u8]> {
    if start >= source.len() {
        return Err(Error::InvalidOffset {
            offset: start,
            len: source.len(),
        });
    }

    let open = source[start..]
        .iter()
        .position(|&b| b == b'{')
        .map(|pos| start + pos)
        .ok_or(Error::OpenBraceNotFound { offset: start })?;

    let mut depth: i64 = 1;
    for (pos, &byte) in source.iter().enumerate().skip(open + 1) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&source[start..=pos]);
                }
            }
            _ => {}
        }
    }

    Err(Error::CloseBraceNotFound { offset: open })
}
