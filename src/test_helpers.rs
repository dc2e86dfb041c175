//! Shared test utilities for the gen-nav test suite.
//!
//! Provides content-tree builders and navigation tree assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! make_tree(tmp.path(), &["01_intro.md", "guide/setup.md", "empty/"]);
//! let nav = build_nav(tmp.path(), ".md").unwrap();
//!
//! assert_nav_shape(&nav, &[
//!     ("Intro", &[]),
//!     ("Guide", &["Setup"]),
//! ]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::NavEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create empty files (and their parent directories) under `root`.
///
/// Paths ending with `/` create an empty directory instead of a file.
pub fn make_tree(root: &Path, paths: &[&str]) {
    for rel in paths {
        let path = root.join(rel.trim_end_matches('/'));
        if rel.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "").unwrap();
        }
    }
}

// =========================================================================
// Navigation helpers
// =========================================================================

/// Titles of the given entries in order.
pub fn nav_titles(entries: &[NavEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

/// Assert that the top two levels of a nav tree match an expected shape.
///
/// Each entry is `(title, child titles)`. Use `&[]` for pages. Titles may
/// repeat, so entries are matched by position.
pub fn assert_nav_shape(nav: &[NavEntry], expected: &[(&str, &[&str])]) {
    let expected_titles: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(nav_titles(nav), expected_titles, "nav top-level titles mismatch");

    for (entry, (title, children)) in nav.iter().zip(expected) {
        assert_eq!(
            nav_titles(entry.children()),
            children.to_vec(),
            "nav children of '{title}' mismatch"
        );
    }
}
