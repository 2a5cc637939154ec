//! Writes destination groups to the filesystem

use tfpacker_fs::{NormalizedPath, io};

use crate::aggregate::DestinationGroup;
use crate::summary::Summary;
use crate::{Error, Result};

/// Materializes destination groups under an output directory.
///
/// Relative destination names land under `output_dir`; absolute ones are
/// written where they point. Existing files are replaced wholesale. In
/// dry-run mode nothing on disk is touched.
#[derive(Debug, Clone)]
pub struct GroupWriter {
    output_dir: NormalizedPath,
    dry_run: bool,
}

impl GroupWriter {
    pub fn new(output_dir: NormalizedPath, dry_run: bool) -> Self {
        Self {
            output_dir,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Where the file for `name` ends up.
    pub fn destination(&self, name: &str) -> NormalizedPath {
        self.output_dir.resolve(name)
    }

    /// Write a single group.
    pub fn write(&self, group: &DestinationGroup) -> Result<()> {
        let path = self.destination(&group.file);

        if self.dry_run {
            tracing::info!("[DRY RUN] Would write {} ({} blocks)", path, group.block_count());
            return Ok(());
        }

        io::write_atomic(&path, &group.joined()).map_err(|source| Error::Write {
            file: path.to_string(),
            source,
        })?;
        tracing::debug!("Wrote {} ({} blocks)", path, group.block_count());
        Ok(())
    }

    /// Write every group in order, stopping at the first failure.
    ///
    /// Files already written before a failure are left in place.
    pub fn write_all(&self, groups: &[DestinationGroup]) -> Result<Summary> {
        let mut summary = Summary::new(self.dry_run);
        for group in groups {
            self.write(group)?;
            summary.record(group.file.clone(), group.block_count());
        }
        Ok(summary)
    }
}
