//! Routing rule configuration for tfpacker.
//!
//! Rules are read from `tfpacker.config.yaml` (or a JSON/TOML file given on
//! the command line):
//!
//! ```yaml
//! rules:
//!   - match_type: "resource"
//!     sub_type: "aws_s3_bucket"
//!     output_file: "s3.tf"
//!   - name_regex: "^db_.*|.*_db$"
//!     ignore_type: true
//!     output_file: "database.tf"
//! ```

pub mod config;
pub mod error;
pub mod rule;

pub use config::{Config, DEFAULT_CONFIG_FILE, load_config, load_or_default};
pub use error::{Error, Result};
pub use rule::Rule;
