//! Rule-based routing of blocks to output files.
//!
//! Rules are tried in the order given and the first one whose constraints
//! all hold decides the file. There is no specificity ranking: a broad rule
//! listed early shadows narrower rules after it. Blocks no rule claims go
//! to a default file derived from their type.

use regex::Regex;
use tfpacker_blocks::Classification;
use tfpacker_config::{Config, Rule};

/// Compiled form of a rule's `name_regex`.
#[derive(Debug)]
enum NameMatcher {
    Unconstrained,
    Pattern(Regex),
    /// The pattern did not compile; the rule can never match.
    Invalid,
}

#[derive(Debug)]
struct CompiledRule {
    rule: Rule,
    name: NameMatcher,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Self {
        let name = if rule.name_regex.is_empty() {
            NameMatcher::Unconstrained
        } else {
            match Regex::new(&rule.name_regex) {
                Ok(re) => NameMatcher::Pattern(re),
                Err(e) => {
                    tracing::warn!(
                        "Ignoring rule for {}: invalid name_regex '{}': {}",
                        rule.output_file,
                        rule.name_regex,
                        e
                    );
                    NameMatcher::Invalid
                }
            }
        };

        Self {
            rule: rule.clone(),
            name,
        }
    }

    fn matches(&self, block_type: &str, subtype: &str, name: &str) -> bool {
        let rule = &self.rule;

        if !rule.ignore_type && rule.match_type != block_type {
            return false;
        }

        if !rule.sub_type.is_empty() && rule.sub_type != subtype {
            return false;
        }

        if !rule.name_prefix.is_empty()
            && (name.is_empty() || !name.starts_with(&rule.name_prefix))
        {
            return false;
        }

        match &self.name {
            NameMatcher::Unconstrained => true,
            NameMatcher::Pattern(re) => !name.is_empty() && re.is_match(name),
            NameMatcher::Invalid => false,
        }
    }
}

/// Resolves blocks to output filenames.
///
/// Built once from the configured rules; routing itself is a pure function
/// of the block identity.
#[derive(Debug, Default)]
pub struct Router {
    rules: Vec<CompiledRule>,
}

impl Router {
    /// Compile `rules`, keeping their order.
    pub fn new(rules: &[Rule]) -> Self {
        Self {
            rules: rules.iter().map(CompiledRule::compile).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.rules)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Output file for a block with the given identity.
    ///
    /// # Example
    /// ```
    /// use tfpacker_config::Rule;
    /// use tfpacker_core::Router;
    ///
    /// let router = Router::new(&[Rule::for_type("variable", "inputs.tf")]);
    /// assert_eq!(router.route("variable", "", "region"), "inputs.tf");
    /// assert_eq!(router.route("output", "", "vpc_id"), "outputs.tf");
    /// ```
    pub fn route(&self, block_type: &str, subtype: &str, name: &str) -> String {
        self.rules
            .iter()
            .find(|compiled| compiled.matches(block_type, subtype, name))
            .map(|compiled| compiled.rule.output_file.clone())
            .unwrap_or_else(|| default_output_file(block_type, subtype))
    }

    pub fn route_class(&self, class: &Classification) -> String {
        self.route(&class.block_type, &class.subtype, &class.name)
    }
}

/// File used for blocks that match no rule.
pub fn default_output_file(block_type: &str, subtype: &str) -> String {
    match block_type {
        "resource" | "data" => format!("{}_{}.tf", block_type, subtype),
        "module" => "modules.tf".to_string(),
        "variable" => "variables.tf".to_string(),
        "output" => "outputs.tf".to_string(),
        "locals" => "locals.tf".to_string(),
        "provider" => "providers.tf".to_string(),
        _ => format!("{}.tf", block_type),
    }
}
