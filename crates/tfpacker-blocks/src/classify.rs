//! Block classification into (type, subtype, name).

/// Routing identity of a top-level block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Block keyword, never empty
    pub block_type: String,
    /// First label of two-label kinds (`resource`, `data`), empty otherwise
    pub subtype: String,
    /// Instance label, empty for unnamed kinds such as `locals`
    pub name: String,
}

impl Classification {
    pub fn new(block_type: &str, subtype: &str, name: &str) -> Self {
        Self {
            block_type: block_type.to_string(),
            subtype: subtype.to_string(),
            name: name.to_string(),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.block_type)?;
        for part in [&self.subtype, &self.name] {
            if !part.is_empty() {
                write!(f, " {}", part)?;
            }
        }
        Ok(())
    }
}

/// Derive the routing identity of a block from its keyword and labels.
///
/// Returns `None` when the block is missing labels its kind requires
/// (`resource "x" {}` or `variable {}`); such blocks are not relocated.
///
/// | keyword | labels | result |
/// |---|---|---|
/// | `resource`, `data` | 2+ | (keyword, labels\[0\], labels\[1\]) |
/// | `module`, `variable`, `output`, `provider` | 1+ | (keyword, "", labels\[0\]) |
/// | `locals` | any | (keyword, "", "") |
/// | other | any | (keyword, "", labels\[0\] or "") |
pub fn classify<S: AsRef<str>>(block_type: &str, labels: &[S]) -> Option<Classification> {
    if block_type.is_empty() {
        return None;
    }

    match block_type {
        "resource" | "data" => {
            let (subtype, name) = (label(labels, 0)?, label(labels, 1)?);
            Some(Classification::new(block_type, subtype, name))
        }
        "module" | "variable" | "output" | "provider" => {
            Some(Classification::new(block_type, "", label(labels, 0)?))
        }
        "locals" => Some(Classification::new(block_type, "", "")),
        _ => Some(Classification::new(
            block_type,
            "",
            label(labels, 0).unwrap_or(""),
        )),
    }
}

fn label<S: AsRef<str>>(labels: &[S], index: usize) -> Option<&str> {
    labels.get(index).map(|l| l.as_ref())
}
