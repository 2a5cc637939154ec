//! Core orchestration layer for tfpacker
//!
//! This crate ties the lower crates into the scan → route → flush pipeline:
//!
//! - **Router**: first-match rule evaluation with built-in default files
//! - **Aggregator**: groups block contents by destination in first-seen order
//! - **GroupWriter**: materializes groups on disk, or only reports them in
//!   dry-run mode
//! - **Packer**: runs the whole pipeline over one directory
//!
//! # Architecture
//!
//! ```text
//!                      CLI
//!                       |
//!                 tfpacker-core
//!                       |
//!      +----------------+----------------+
//!      |                |                |
//! tfpacker-fs   tfpacker-config   tfpacker-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tfpacker_config::Config;
//! use tfpacker_core::{PackOptions, Packer};
//!
//! let packer = Packer::new(&Config::default(), PackOptions::new("output"));
//! let summary = packer.run(std::path::Path::new("infra")).unwrap();
//! println!("{}", summary);
//! ```

pub mod aggregate;
pub mod error;
pub mod packer;
pub mod router;
pub mod summary;
pub mod version;
pub mod writer;

pub use aggregate::{Aggregator, BLOCK_SEPARATOR, DestinationGroup};
pub use error::{Error, Result};
pub use packer::{PackOptions, Packer};
pub use router::{Router, default_output_file};
pub use summary::{FileCount, Summary};
pub use writer::GroupWriter;
