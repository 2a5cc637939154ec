//! [`TestWorkspace`] for pack scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a `src/` tree of Terraform sources and an
/// `out/` directory for results.
///
/// # Example
///
/// ```rust,no_run
/// use tfpacker_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write_source("main.tf", "variable \"region\" {}\n");
/// ws.write_config("tfpacker.config.yaml", "rules: []\n");
/// assert!(!ws.output_exists("variables.tf"));
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create a workspace with an empty `src/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory holding the source documents.
    pub fn source_dir(&self) -> PathBuf {
        self.root().join("src")
    }

    /// Directory results are written to. Not created up front.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Write a source document under `src/`.
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.source_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a config file at the workspace root.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file under `out/`, panicking if it is missing.
    pub fn read_output(&self, name: &str) -> String {
        let path = self.output_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read output {}: {}", path.display(), e))
    }

    pub fn output_exists(&self, name: &str) -> bool {
        self.output_dir().join(name).exists()
    }

    /// Names of the files under `out/`, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
