//! The default command: reorganize one directory

use std::path::{Path, PathBuf};

use tfpacker_config::load_or_default;
use tfpacker_core::{PackOptions, Packer, Summary};
use tfpacker_fs::{ExcludeSet, NormalizedPath};

use crate::error::{CliError, Result};

/// Inputs for a pack run, as given on the command line.
#[derive(Debug, Clone)]
pub struct PackArgs {
    pub dir: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    pub exclude: Vec<String>,
}

/// Load the rules, pack `args.dir` and return the summary.
///
/// Configuration and exclude patterns are validated before any source file
/// is read.
pub fn pack(args: &PackArgs) -> Result<Summary> {
    let config = load_or_default(&NormalizedPath::new(&args.config))?;
    let excludes = ExcludeSet::new(&args.exclude)?;
    check_source_dir(&args.dir)?;

    tracing::debug!(
        "Packing {} into {} with {} rules",
        args.dir.display(),
        args.output.display(),
        config.rules.len()
    );

    let options = PackOptions::new(&args.output)
        .dry_run(args.dry_run)
        .excludes(excludes);
    let summary = Packer::new(&config, options).run(&args.dir)?;
    Ok(summary)
}

/// Run [`pack`] and print the summary to stdout.
pub fn run_pack(args: &PackArgs) -> Result<()> {
    let summary = pack(args)?;
    print!("{}", summary);
    Ok(())
}

fn check_source_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(CliError::user(format!(
            "Source directory not found: {}",
            dir.display()
        )));
    }
    Ok(())
}
