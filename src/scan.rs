//! Content tree snapshot and navigation generation.
//!
//! The first thing a build does: read the content root once into a
//! [`ContentNode`] snapshot, then derive the navigation tree from it. The
//! builder itself never touches the filesystem, so tests can feed it
//! hand-made snapshots.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Content root
//! ├── index.md                     # Landing page, left out of the nav
//! ├── 01_getting-started/          # Section "Getting Started", sorted first
//! │   ├── 01_install.md            # "Install"
//! │   ├── 02_first-steps.md        # "First Steps"
//! │   └── _snippets/               # Leading underscore = ignored
//! ├── 02_guide_/                   # Index-bearing directory: single entry
//! │   ├── index.md                 # "Guide" links here
//! │   └── details.md               # Not traversed
//! ├── blog/
//! │   └── index.md                 # Nested index kept as "Index"
//! └── empty/                       # No pages = no nav entry
//! ```
//!
//! ## Rules
//!
//! - Only directories and files ending with the include suffix are considered.
//! - Entries are sorted by raw name (byte order), so `NN_` prefixes order them.
//! - Names starting with `_` are skipped, and so is `index` at the root.
//! - A directory whose name ends with `_` becomes a single page pointing at its
//!   `index` file, which must exist.
//! - Directories without any pages produce nothing.

use crate::naming::{format_title, parse_entry_name};
use crate::types::NavEntry;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Index-bearing directory has no index file: {0}")]
    MissingIndex(String),
}

/// A file or directory in the content snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<ContentNode>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            children,
        }
    }

    /// Recursively snapshot the directory at `path`.
    ///
    /// Symlinks are followed, the same way `Path::is_dir` does. Entries whose
    /// name is not valid UTF-8 are skipped with a warning.
    pub fn read(path: &Path) -> Result<Self, ScanError> {
        // The root's own name never appears in a nav path.
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        Ok(Self::dir(name, read_children(path)?))
    }

    /// Direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&ContentNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

fn read_children(path: &Path) -> Result<Vec<ContentNode>, ScanError> {
    let mut children = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!(
                    path = %entry_path.display(),
                    name = ?raw,
                    "Skipping entry with non-UTF-8 name"
                );
                continue;
            }
        };
        if entry_path.is_dir() {
            children.push(ContentNode::dir(name, read_children(&entry_path)?));
        } else {
            children.push(ContentNode::file(name));
        }
    }
    Ok(children)
}

/// Snapshot `root` and build its navigation tree.
pub fn build_nav(root: &Path, include: &str) -> Result<Vec<NavEntry>, ScanError> {
    let snapshot = ContentNode::read(root)?;
    let nav = build(&snapshot, include)?;
    tracing::debug!(root = %root.display(), entries = nav.len(), "Navigation built");
    Ok(nav)
}

/// Build the navigation tree for a snapshot of the content root.
///
/// Paths in the result are relative to `root` and `/`-separated.
pub fn build(root: &ContentNode, include: &str) -> Result<Vec<NavEntry>, ScanError> {
    build_level(root, "", true, include)
}

fn build_level(
    dir: &ContentNode,
    rel_dir: &str,
    is_root: bool,
    include: &str,
) -> Result<Vec<NavEntry>, ScanError> {
    let mut kept: Vec<&ContentNode> = dir
        .children
        .iter()
        .filter(|c| c.is_dir || c.name.ends_with(include))
        .collect();
    kept.sort_by(|a, b| a.name.cmp(&b.name));

    let mut entries = Vec::new();
    for node in kept {
        let base_name = if node.is_dir {
            node.name.as_str()
        } else {
            strip_extension(&node.name)
        };
        let rel_path = join_rel(rel_dir, &node.name);

        if base_name.starts_with('_') || (is_root && base_name == "index") {
            tracing::debug!(path = %rel_path, "Skipping entry");
            continue;
        }

        let parsed = parse_entry_name(base_name);
        let title = format_title(parsed.name);

        if node.is_dir && parsed.index_marker {
            let index_name = format!("index{include}");
            let index_path = join_rel(&rel_path, &index_name);
            match node.child(&index_name) {
                Some(index) if !index.is_dir => entries.push(NavEntry::page(title, index_path)),
                _ => return Err(ScanError::MissingIndex(index_path)),
            }
        } else if !node.is_dir {
            entries.push(NavEntry::page(title, rel_path));
        } else {
            let children = build_level(node, &rel_path, false, include)?;
            if children.is_empty() {
                tracing::debug!(path = %rel_path, "Omitting directory without pages");
            } else {
                entries.push(NavEntry::section(title, children));
            }
        }
    }

    Ok(entries)
}

/// Drop the last extension, keeping dotfiles like `.md` whole.
fn strip_extension(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

fn join_rel(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
