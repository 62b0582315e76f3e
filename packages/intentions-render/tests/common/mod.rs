//! Common test utilities for intentions-render
//!
//! Fixture paths and generators for Python test modules.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Fixture directory, relative to the package root (the test working directory)
pub const FIXTURES_DIR: &str = "./tests/fixtures";

/// The accounts/investments fixture module
pub const FIXTURE_FILE: &str = "tests/fixtures/test_file.py";

/// Generate a decorated free test function with one marker of each kind
pub fn fixture_free_test(domain: &str, name: &str) -> String {
    format!(
        "@describe(domain='{domain}', component='{domain}', layer='service')\n\
         def {name}():\n\
         \x20   with when('Given'):\n\
         \x20       pass\n\
         \x20   with case('Act'):\n\
         \x20       pass\n\
         \x20   with expect('Then'):\n\
         \x20       pass\n"
    )
}

/// Write `content` to `root/relative`, creating directories
pub fn write_module(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
