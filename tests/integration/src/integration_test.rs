//! End-to-end integration tests for the pack pipeline
//!
//! These exercise the complete flow: config loading -> scanning -> routing
//! -> writing, across every supported config format.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tfpacker_blocks::{HclDocumentParser, scan_file};
use tfpacker_config::load_config;
use tfpacker_core::{Aggregator, GroupWriter, PackOptions, Packer, Router};
use tfpacker_fs::NormalizedPath;
use tfpacker_test_utils::TestWorkspace;
use tfpacker_test_utils::fixtures::MAIN_TF;

const RULES_YAML: &str = r#"
rules:
  - match_type: variable
    output_file: inputs.tf
  - ignore_type: true
    name_prefix: bucket_
    output_file: exports.tf
"#;

const RULES_JSON: &str = r#"{
  "rules": [
    {"match_type": "variable", "output_file": "inputs.tf"},
    {"ignore_type": true, "name_prefix": "bucket_", "output_file": "exports.tf"}
  ]
}"#;

const RULES_TOML: &str = r#"
[[rules]]
match_type = "variable"
output_file = "inputs.tf"

[[rules]]
ignore_type = true
name_prefix = "bucket_"
output_file = "exports.tf"
"#;

#[rstest]
#[case::yaml("tfpacker.config.yaml", RULES_YAML)]
#[case::yml("tfpacker.config.yml", RULES_YAML)]
#[case::json("tfpacker.config.json", RULES_JSON)]
#[case::toml("tfpacker.config.toml", RULES_TOML)]
fn test_same_rules_in_every_format(#[case] file: &str, #[case] content: &str) {
    let ws = TestWorkspace::new();
    ws.write_source("main.tf", MAIN_TF);
    let config_path = ws.write_config(file, content);

    let config = load_config(&NormalizedPath::new(&config_path)).unwrap();
    let summary = Packer::new(&config, PackOptions::new(ws.output_dir()))
        .run(&ws.source_dir())
        .unwrap();

    assert_eq!(summary.blocks_for("inputs.tf"), Some(2));
    assert_eq!(summary.blocks_for("exports.tf"), Some(1));
    assert_eq!(
        ws.read_output("exports.tf"),
        "output \"bucket_arn\" {\n  value = aws_s3_bucket.logs.arn\n}"
    );
    assert!(!ws.output_exists("variables.tf"));
    assert!(!ws.output_exists("outputs.tf"));
}

#[test]
fn test_layers_compose_like_packer() {
    let ws = TestWorkspace::new();
    let source = ws.write_source("main.tf", MAIN_TF);
    let config_path = ws.write_config("tfpacker.config.yaml", RULES_YAML);
    let config = load_config(&NormalizedPath::new(&config_path)).unwrap();

    let blocks = scan_file(&source, &HclDocumentParser::new()).unwrap();
    assert_eq!(blocks.len(), 9);
    assert!(blocks.iter().all(|b| b.source_file() == source.as_path()));

    let router = Router::from_config(&config);
    let mut aggregator = Aggregator::new(&router);
    aggregator.extend(blocks);

    let files: Vec<&str> = aggregator.groups().iter().map(|g| g.file.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "terraform.tf",
            "providers.tf",
            "inputs.tf",
            "locals.tf",
            "resource_aws_s3_bucket.tf",
            "data_aws_region.tf",
            "modules.tf",
            "exports.tf",
        ]
    );

    let writer = GroupWriter::new(NormalizedPath::new(ws.output_dir()), false);
    let summary = writer.write_all(aggregator.groups()).unwrap();
    assert_eq!(summary.total_files(), ws.output_files().len());
}

#[test]
fn test_packed_output_repacks_to_the_same_layout() {
    let ws = TestWorkspace::new();
    ws.write_source("main.tf", MAIN_TF);

    Packer::new(&Default::default(), PackOptions::new(ws.output_dir()))
        .run(&ws.source_dir())
        .unwrap();

    let second = ws.root().join("second");
    let summary = Packer::new(&Default::default(), PackOptions::new(&second))
        .run(&ws.output_dir())
        .unwrap();

    assert_eq!(summary.total_blocks(), 9);
    for name in ws.output_files() {
        let repacked = std::fs::read_to_string(second.join(&name)).unwrap();
        assert_eq!(repacked, ws.read_output(&name), "{name} changed on repack");
    }
}
