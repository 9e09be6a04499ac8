// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use nocebo::NoceboAnalyzer;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path of the artifact shipped with the crate
pub fn shipped_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("models").join("nocebo_model.json")
}

/// Analyzer backed by the shipped artifact
pub fn shipped_analyzer() -> NoceboAnalyzer {
    NoceboAnalyzer::from_artifact_path(shipped_model_path()).expect("Shipped artifact should load")
}

/// Test fixture helper for creating temporary directories with artifacts and inputs
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file relative to the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write an artifact from a JSON value
    pub fn create_artifact(&self, name: &str, artifact: &serde_json::Value) -> PathBuf {
        self.create_file(name, &serde_json::to_string_pretty(artifact).expect("Artifact should serialize"))
    }
}

/// Small artifact where "alarm" pushes towards 3 and "calm" towards 0
pub fn tiny_artifact() -> serde_json::Value {
    serde_json::json!({
        "format_version": 1,
        "vectorizer": {
            "lowercase": true,
            "ngram_range": [1, 1],
            "sublinear_tf": false,
            "norm": "l2",
            "vocabulary": {"alarm": 0, "calm": 1},
            "idf": [1.0, 1.0]
        },
        "classifier": {
            "classes": [0, 1, 2, 3],
            "coef": [[-1.0, 1.0], [0.0, 0.0], [0.0, 0.0], [1.0, -1.0]],
            "intercept": [0.1, 0.0, 0.0, 0.0]
        }
    })
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    // Trailing whitespace is not significant in golden text
    let actual_lines: Vec<&str> = actual.lines().map(str::trim_end).collect();
    let expected_lines: Vec<&str> = expected.lines().map(str::trim_end).collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\nActual:\n{}",
            context, expected_lines.len(), actual_lines.len(), actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context, i + 1, expected_line, actual_line
            );
        }
    }
}
