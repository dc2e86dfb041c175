//! Public path normalization.
//!
//! Ordering prefixes only matter on disk. Before pages are written, every
//! segment of an output file's paths is stripped of its `NN_` prefix so
//! `01_guide/02_setup.md` is published as `guide/setup/`.
//!
//! Two forms exist: native paths (destination on disk, separators as the OS
//! writes them) and URL forms (always `/`). The trailing `_` index marker is
//! a nav-building hint and is left alone here.

use crate::naming::strip_all_ordering_prefixes;
use crate::types::OutputFile;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Strip ordering prefixes from every segment of a native path.
///
/// Root and drive prefixes are preserved, so absolute paths stay absolute.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .map(|component| match component {
            Component::Normal(segment) => normalize_segment(segment.to_os_string()),
            other => other.as_os_str().to_os_string(),
        })
        .collect()
}

fn normalize_segment(segment: OsString) -> OsString {
    match segment.to_str() {
        Some(s) => OsString::from(strip_all_ordering_prefixes(s)),
        None => segment,
    }
}

/// Strip ordering prefixes from every segment of a URL or URI.
///
/// Output always uses `/`. Leading and trailing slashes are kept; the
/// platform separator is read as `/` as well.
pub fn normalize_url(url: &str) -> String {
    url.split(['/', std::path::MAIN_SEPARATOR])
        .map(strip_all_ordering_prefixes)
        .collect::<Vec<_>>()
        .join("/")
}

/// Render a relative path as a `/`-separated URI.
pub fn to_uri(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Return the public version of an output file.
///
/// Each of the four path properties is normalized on its own; every segment
/// loses its ordering prefix, including directories above the site root.
pub fn rename_file(file: &OutputFile) -> OutputFile {
    OutputFile {
        src_path: file.src_path.clone(),
        dest_path: normalize_path(&file.dest_path),
        dest_uri: normalize_url(&file.dest_uri),
        url: normalize_url(&file.url),
        abs_dest_path: normalize_path(&file.abs_dest_path),
    }
}
