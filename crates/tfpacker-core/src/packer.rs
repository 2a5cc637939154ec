//! The scan, route and flush pipeline over one source directory

use std::path::Path;

use tfpacker_blocks::{Block, DocumentParser, HclDocumentParser, scan_file};
use tfpacker_config::Config;
use tfpacker_fs::{ExcludeSet, NormalizedPath, list_sources};

use crate::Result;
use crate::aggregate::Aggregator;
use crate::router::Router;
use crate::summary::Summary;
use crate::writer::GroupWriter;

/// Run-time options for a pack.
#[derive(Debug, Clone)]
pub struct PackOptions {
    pub output_dir: NormalizedPath,
    pub dry_run: bool,
    pub excludes: ExcludeSet,
}

impl PackOptions {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: NormalizedPath::new(output_dir),
            dry_run: false,
            excludes: ExcludeSet::default(),
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }
}

/// Reorganizes the top-level blocks of one directory into output files.
pub struct Packer {
    router: Router,
    parser: Box<dyn DocumentParser>,
    options: PackOptions,
}

impl Packer {
    /// Create a packer using the HCL parser.
    pub fn new(config: &Config, options: PackOptions) -> Self {
        Self {
            router: Router::from_config(config),
            parser: Box::new(HclDocumentParser::new()),
            options,
        }
    }

    /// Replace the document parser.
    pub fn with_parser(mut self, parser: Box<dyn DocumentParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    /// Collect blocks from every source file in `dir`.
    ///
    /// Files are visited in name order. A file that fails to read or parse
    /// is logged and skipped; the others are still scanned.
    ///
    /// # Errors
    ///
    /// Returns an error only if `dir` itself cannot be listed.
    pub fn scan(&self, dir: &Path) -> Result<Vec<Block>> {
        let sources = list_sources(dir, &self.options.excludes)?;
        tracing::debug!("Found {} source files in {}", sources.len(), dir.display());

        let mut blocks = Vec::new();
        for source in sources {
            tracing::debug!("Parsing file: {}", source.display());
            match scan_file(&source, self.parser.as_ref()) {
                Ok(found) => blocks.extend(found),
                Err(e) => tracing::error!("Error parsing file {}: {}", source.display(), e),
            }
        }

        tracing::debug!("Extracted {} blocks from {}", blocks.len(), dir.display());
        Ok(blocks)
    }

    /// Scan `dir`, route every block and write the resulting files.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be listed or a destination cannot be
    /// written. Destinations written before a write failure stay on disk.
    pub fn run(&self, dir: &Path) -> Result<Summary> {
        let blocks = self.scan(dir)?;

        let mut aggregator = Aggregator::new(&self.router);
        aggregator.extend(blocks);

        let writer = GroupWriter::new(self.options.output_dir.clone(), self.options.dry_run);
        writer.write_all(aggregator.groups())
    }
}

impl std::fmt::Debug for Packer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packer")
            .field("router", &self.router)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
