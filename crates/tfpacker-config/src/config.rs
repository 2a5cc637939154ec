//! Configuration loading and validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use tfpacker_fs::{ConfigStore, NormalizedPath};

use crate::rule::Rule;
use crate::{Error, Result};

/// Config file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "tfpacker.config.yaml";

/// Top-level configuration: an ordered list of routing rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: Vec<Rule>,
}

impl Config {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Check rule invariants after deserialization.
    ///
    /// A rule without `output_file` has nowhere to send blocks and is
    /// rejected. A `name_regex` that does not compile is only reported:
    /// such a rule never matches.
    pub fn validate(&self, path: &NormalizedPath) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.output_file.trim().is_empty() {
                return Err(Error::InvalidConfig {
                    path: path.to_native(),
                    message: format!("rule {} has no output_file", index + 1),
                });
            }

            if !rule.name_regex.is_empty()
                && let Err(e) = Regex::new(&rule.name_regex)
            {
                tracing::warn!(
                    "Rule {} name_regex '{}' does not compile and will never match: {}",
                    index + 1,
                    rule.name_regex,
                    e
                );
            }
        }
        Ok(())
    }
}

/// Load and validate the configuration at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML/JSON/TOML,
/// or contains a rule without an output file.
pub fn load_config(path: &NormalizedPath) -> Result<Config> {
    let config: Config = ConfigStore::new().load(path)?;
    config.validate(path)?;
    tracing::debug!(
        "Loaded configuration from {} with {} rules",
        path,
        config.rules.len()
    );
    Ok(config)
}

/// Load the configuration at `path`, or the empty default if it does not
/// exist.
///
/// A file that exists but fails to load is still an error.
pub fn load_or_default(path: &NormalizedPath) -> Result<Config> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using default configuration", path);
        return Ok(Config::default());
    }
    load_config(path)
}
