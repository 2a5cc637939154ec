//! Version command

/// Print the version line to stdout.
pub fn run_version() {
    println!("{}", tfpacker_core::version::info());
}
