#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the codeshape binary.
#[macro_export]
macro_rules! codeshape {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("codeshape"))
    };
}

/// Temporary directory with helpers for building source-tree fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".codeshape.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A ten-line Python model file: two blanks, two full-line comments, one
/// class and two method declarations, six code lines.
pub const WIDGET_MODEL: &str = "\
# models for the demo app
class Widget:
    def name(self):
        return \"widget\"

    # helper
    def size(self):
        return 1

w = Widget()
";

/// A five-line Python test file: all code, one method declaration.
pub const WIDGET_TEST: &str = "\
def test_widget():
    w = object()
    assert w
    x = 1
    assert x
";
