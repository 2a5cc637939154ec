//! Build identification

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from, if supplied at build time.
pub fn commit() -> &'static str {
    option_env!("TFPACKER_COMMIT").unwrap_or("unknown")
}

/// Build date, if supplied at build time.
pub fn build_date() -> &'static str {
    option_env!("TFPACKER_BUILD_DATE").unwrap_or("unknown")
}

/// Full version line, e.g. `tfpacker 0.1.0 (abc1234) built on 2024-01-01`.
pub fn info() -> String {
    format!("tfpacker {} ({}) built on {}", VERSION, commit(), build_date())
}

/// Version number only.
pub fn short() -> &'static str {
    VERSION
}
