//! Centralized name parsing for the `NN_name` convention.
//!
//! Every path segment under the content root (directories and files alike)
//! may carry two markers:
//!
//! - a leading ordering prefix: exactly two ASCII digits and an underscore
//!   (`01_`, `99_`). It only influences sort order, because entries are sorted
//!   by their raw name.
//! - a trailing underscore on a directory name (`guide_/`), meaning "this
//!   directory is a single page: link to its `index` file".
//!
//! ## Display Titles
//!
//! Dashes and underscores become spaces and every word gets an uppercase
//! first letter:
//! - `01_getting-started/` → "Getting Started"
//! - `sub-dir1/` → "Sub Dir1"
//! - `02_guide_/` → "Guide"

/// Length of an ordering prefix such as `01_`.
const PREFIX_LEN: usize = 3;

/// Result of parsing a raw segment name like `02_guide_`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName<'a> {
    /// Name with the ordering prefix and index marker removed.
    pub name: &'a str,
    /// True when the name ended with the `_` index marker.
    pub index_marker: bool,
}

/// Strip a leading `NN_` ordering prefix.
///
/// - `"01_item"` → `"item"`
/// - `"ab_item"` → `"ab_item"` (not digits)
/// - `"7"` → `"7"` (too short)
pub fn strip_ordering_prefix(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= PREFIX_LEN
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'_'
    {
        // The first three bytes are ASCII, so this is a char boundary.
        &name[PREFIX_LEN..]
    } else {
        name
    }
}

/// Strip ordering prefixes until none is left.
///
/// Used for public paths, where a single pass would not be idempotent on
/// names like `01_02_intro`.
pub fn strip_all_ordering_prefixes(mut name: &str) -> &str {
    loop {
        let stripped = strip_ordering_prefix(name);
        if stripped.len() == name.len() {
            return name;
        }
        name = stripped;
    }
}

/// Parse a base name (extension already removed) into its title source.
///
/// The index marker is only recognised here; whether it applies depends on
/// the entry being a directory, which the caller decides.
pub fn parse_entry_name(base_name: &str) -> ParsedName<'_> {
    let name = strip_ordering_prefix(base_name);
    match name.strip_suffix('_') {
        Some(rest) => ParsedName {
            name: rest,
            index_marker: true,
        },
        None => ParsedName {
            name,
            index_marker: false,
        },
    }
}

/// Turn a raw segment into a display title.
///
/// Only the first letter of each word is forced to uppercase; the rest of the
/// word is kept as written, so `"API-reference"` stays `"API Reference"`.
pub fn format_title(raw: &str) -> String {
    raw.split(['-', '_'])
        .flat_map(str::split_whitespace)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
