//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every nav entry is shown by its positional index and title first, with the
//! file it links to as secondary context. Sections list their children one
//! indentation level deeper.
//!
//! # Output Format
//!
//! ## Tree
//!
//! ```text
//! 001 Getting Started
//!     001 Install → 01_getting-started/01_install.md
//!     002 First Steps → 01_getting-started/02_first-steps.md
//! 002 Guide → 02_guide_/index.md
//!
//! 2 sections, 3 pages
//! ```
//!
//! ## Files
//!
//! ```text
//! 01_getting-started/01_install.md → getting-started/install/
//! index.md → (site root)
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::types::{NavEntry, NavTarget, OutputFile};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entry header: positional index + title, with the page path if any.
///
/// ```text
/// 001 Install → 01_install.md
/// 002 Guide
/// ```
fn entry_header(index: usize, title: &str, path: Option<&str>) -> String {
    match path {
        Some(p) => format!("{} {} → {}", format_index(index), title, p),
        None => format!("{} {}", format_index(index), title),
    }
}

// ============================================================================
// Tree walker
// ============================================================================

#[derive(Default)]
struct Counts {
    sections: usize,
    pages: usize,
}

fn walk_nav(entries: &[NavEntry], depth: usize, lines: &mut Vec<String>, counts: &mut Counts) {
    for (i, entry) in entries.iter().enumerate() {
        let header = entry_header(i + 1, &entry.title, entry.path());
        lines.push(format!("{}{}", indent(depth), header));
        match &entry.target {
            NavTarget::Page(_) => counts.pages += 1,
            NavTarget::Section(children) => {
                counts.sections += 1;
                walk_nav(children, depth + 1, lines, counts);
            }
        }
    }
}

// ============================================================================
// Views
// ============================================================================

/// Format the navigation tree with a trailing summary line.
pub fn format_nav_tree(nav: &[NavEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut counts = Counts::default();
    walk_nav(nav, 0, &mut lines, &mut counts);

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{} {}, {} {}",
        counts.sections,
        plural(counts.sections, "section", "sections"),
        counts.pages,
        plural(counts.pages, "page", "pages"),
    ));
    lines
}

pub fn print_nav_tree(nav: &[NavEntry]) {
    for line in format_nav_tree(nav) {
        println!("{}", line);
    }
}

/// Format source → public URL pairs for renamed output files.
pub fn format_files(files: &[OutputFile]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            let url = if f.url.is_empty() {
                "(site root)"
            } else {
                f.url.as_str()
            };
            format!("{} → {}", crate::paths::to_uri(&f.src_path), url)
        })
        .collect()
}

pub fn print_files(files: &[OutputFile]) {
    for line in format_files(files) {
        println!("{}", line);
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
