#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Empty temporary directory with a non-hidden name, so it survives the
/// dotfile filter when used as a walk root.
pub fn empty_tree() -> TempDir {
    tempfile::Builder::new().prefix("langshare").tempdir().unwrap()
}

/// Temporary directory tree built from `(relative path, content)` pairs.
pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = empty_tree();
    for (relative, content) in files {
        write_file(temp_dir.path(), relative, content);
    }
    temp_dir
}

pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Eight Go files and two Markdown files outside any documentation path.
pub fn go_with_markdown() -> TempDir {
    create_tree(&[
        ("cmd/a.go", "package main"),
        ("cmd/b.go", "package main"),
        ("pkg/c.go", "package pkg"),
        ("pkg/d.go", "package pkg"),
        ("pkg/e.go", "package pkg"),
        ("pkg/f.go", "package pkg"),
        ("pkg/g.go", "package pkg"),
        ("pkg/h.go", "package pkg"),
        ("notes/design.md", "# design"),
        ("notes/plan.md", "# plan"),
    ])
}
