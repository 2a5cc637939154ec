//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tfpacker_config::DEFAULT_CONFIG_FILE;

/// tfpacker - Reorganize Terraform blocks into files by rule
#[derive(Parser, Debug)]
#[command(name = "tfpacker")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Directory containing the .tf files to reorganize
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Rule file (YAML, JSON or TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Comma-separated glob patterns of file names to skip
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Directory output files are written to
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print version and build information
    Version,
}
