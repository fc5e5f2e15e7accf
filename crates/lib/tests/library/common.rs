//! Shared helpers for library integration tests.

use std::path::{Path, PathBuf};

use mods_lib::{EvalError, Workspace, evaluate_config};
use tempfile::TempDir;

/// A configuration tree in a temporary directory.
pub struct TestTree {
  pub temp: TempDir,
}

impl TestTree {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  /// Write a file relative to the tree root, creating parent directories.
  pub fn write(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.root().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Evaluate the tree's `MODS` entry file.
  pub fn eval(&self) -> Result<Workspace, EvalError> {
    evaluate_config(&self.root().join("MODS"))
  }
}
