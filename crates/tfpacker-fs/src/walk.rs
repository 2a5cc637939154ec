//! Source file discovery
//!
//! Lists the Terraform sources directly inside a directory. The listing is
//! not recursive; nested directories are separate modules and are left
//! alone.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::{Error, Result};

/// Suffix identifying Terraform sources in native HCL syntax.
pub const SOURCE_SUFFIX: &str = ".tf";

/// Compiled exclude globs, matched against bare file names.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    /// Compile the given glob patterns.
    ///
    /// Blank entries (for example from a trailing comma) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for the first pattern that does not
    /// compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| p.as_ref().trim())
            .filter(|p| !p.is_empty())
            .map(|p| {
                Pattern::new(p).map_err(|e| Error::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `file_name` matches any pattern.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }
}

/// List candidate source files in `dir`, sorted by file name.
///
/// Only regular files ending in `.tf` are returned; symlinks,
/// subdirectories, `.tf.json` files and names matching `excludes` are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if `dir` cannot be read.
pub fn list_sources(dir: &Path, excludes: &ExcludeSet) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::debug!("Skipping non UTF-8 file name {:?}", file_name);
            continue;
        };

        if !name.ends_with(SOURCE_SUFFIX) {
            continue;
        }

        if excludes.is_excluded(name) {
            tracing::debug!("Excluding {}", name);
            continue;
        }

        sources.push(entry.path());
    }

    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(sources)
}
