//! Filesystem abstraction for tfpacker
//!
//! Provides normalized path handling, atomic writes, format-agnostic
//! config loading and source directory listing.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use walk::{ExcludeSet, list_sources};
