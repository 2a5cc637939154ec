//! Shared test utilities for the tfpacker workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`workspace`]: [`TestWorkspace`] with a source directory and an output
//!   directory
//! - [`fixtures`]: sample Terraform documents and configs

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
