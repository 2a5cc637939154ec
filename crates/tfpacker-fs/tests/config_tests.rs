use std::fs;

use serde::Deserialize;
use tempfile::TempDir;
use tfpacker_fs::{ConfigStore, Error, NormalizedPath};

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    name: String,
    #[serde(default)]
    count: u32,
}

fn write(temp: &TempDir, name: &str, content: &str) -> NormalizedPath {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    NormalizedPath::new(path)
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "c.yaml", "name: packer\ncount: 3\n");

    let sample: Sample = ConfigStore::new().load(&path).unwrap();
    assert_eq!(
        sample,
        Sample {
            name: "packer".into(),
            count: 3
        }
    );
}

#[test]
fn test_load_yml_json_and_toml() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new();

    let yml: Sample = store.load(&write(&temp, "c.yml", "name: a\n")).unwrap();
    let json: Sample = store.load(&write(&temp, "c.json", r#"{"name": "b"}"#)).unwrap();
    let toml: Sample = store.load(&write(&temp, "c.toml", "name = \"c\"\n")).unwrap();

    assert_eq!(yml.name, "a");
    assert_eq!(json.name, "b");
    assert_eq!(toml.name, "c");
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "bad.yaml", "invalid: yaml: content");

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "YAML"));
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "config.ini", "name=x");

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.yaml"));

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
