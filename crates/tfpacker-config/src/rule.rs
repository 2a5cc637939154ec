//! Routing rule schema

use serde::{Deserialize, Serialize};

/// A routing directive sending matching blocks to `output_file`.
///
/// Every empty field is unconstrained. `match_type` is compared against the
/// block keyword unless `ignore_type` is set, in which case any keyword
/// passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// Block keyword to match (`resource`, `variable`, ...)
    pub match_type: String,
    /// First label of two-label blocks (`aws_s3_bucket`)
    pub sub_type: String,
    /// Required prefix of the block name
    pub name_prefix: String,
    /// Pattern searched for in the block name
    pub name_regex: String,
    /// Skip the `match_type` comparison
    pub ignore_type: bool,
    /// Destination file, relative to the output directory unless absolute
    pub output_file: String,
}

impl Rule {
    /// Rule matching every block of `match_type`.
    pub fn for_type(match_type: impl Into<String>, output_file: impl Into<String>) -> Self {
        Self {
            match_type: match_type.into(),
            output_file: output_file.into(),
            ..Self::default()
        }
    }

    /// Rule matching any block type, to be narrowed with the builder methods.
    pub fn any_type(output_file: impl Into<String>) -> Self {
        Self {
            ignore_type: true,
            output_file: output_file.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = sub_type.into();
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn with_name_regex(mut self, regex: impl Into<String>) -> Self {
        self.name_regex = regex.into();
        self
    }

    /// Whether the rule constrains nothing and therefore matches every block.
    pub fn is_catch_all(&self) -> bool {
        self.ignore_type
            && self.sub_type.is_empty()
            && self.name_prefix.is_empty()
            && self.name_regex.is_empty()
    }
}
