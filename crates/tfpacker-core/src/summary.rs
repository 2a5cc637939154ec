//! End-of-run report

use std::fmt;

/// Number of blocks written (or planned) for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub file: String,
    pub blocks: usize,
}

/// What a pack run produced.
///
/// Rendered as:
///
/// ```text
/// Summary of changes:
///   - variables.tf: 3 blocks
///
/// Total: 3 blocks in 1 files
/// ```
///
/// with a `[DRY RUN] ` prefix on the first line when nothing was written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub dry_run: bool,
    pub files: Vec<FileCount>,
}

impl Summary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, file: impl Into<String>, blocks: usize) {
        self.files.push(FileCount {
            file: file.into(),
            blocks,
        });
    }

    pub fn total_blocks(&self) -> usize {
        self.files.iter().map(|f| f.blocks).sum()
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    pub fn blocks_for(&self, file: &str) -> Option<usize> {
        self.files.iter().find(|f| f.file == file).map(|f| f.blocks)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(f, "[DRY RUN] ")?;
        }
        writeln!(f, "Summary of changes:")?;
        for entry in &self.files {
            writeln!(f, "  - {}: {} blocks", entry.file, entry.blocks)?;
        }
        writeln!(
            f,
            "\nTotal: {} blocks in {} files",
            self.total_blocks(),
            self.total_files()
        )
    }
}
