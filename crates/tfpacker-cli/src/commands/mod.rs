//! Command implementations for tfpacker-cli

pub mod pack;
pub mod version;

pub use pack::{PackArgs, run_pack};
pub use version::run_version;
