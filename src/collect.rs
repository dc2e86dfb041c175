//! Output file discovery for the command-line host.
//!
//! A real static-site host collects files itself and only calls the rename
//! hook. The CLI has no such host, so this module produces the same records
//! with directory-style URLs:
//!
//! ```text
//! index.md             → index.html              url ""
//! 01_guide/index.md    → 01_guide/index.html     url "01_guide/"
//! 01_guide/02_setup.md → 01_guide/02_setup/index.html  url "01_guide/02_setup/"
//! ```
//!
//! Ordering prefixes are still present here; stripping them is the rename
//! hook's job.

use crate::paths::to_uri;
use crate::types::OutputFile;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const INDEX_PAGE: &str = "index.html";

/// Collect every content file ending with `include` under `docs_dir`.
///
/// Files are returned in file-name order. Entries whose name starts with `.`
/// are not visited.
pub fn collect_files(docs_dir: &Path, site_dir: &Path, include: &str) -> io::Result<Vec<OutputFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(docs_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(include) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(docs_dir) else {
            continue;
        };
        files.push(output_file(rel, site_dir));
    }

    tracing::debug!(docs_dir = %docs_dir.display(), count = files.len(), "Collected output files");
    Ok(files)
}

/// Build the output record for a content file at `rel` under the content root.
pub fn output_file(rel: &Path, site_dir: &Path) -> OutputFile {
    let is_index = rel.file_stem().is_some_and(|s| s == "index");
    let page_dir: PathBuf = if is_index {
        rel.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        rel.with_extension("")
    };

    let dest_path = page_dir.join(INDEX_PAGE);
    let dir_uri = to_uri(&page_dir);
    let url = if dir_uri.is_empty() {
        String::new()
    } else {
        format!("{dir_uri}/")
    };

    OutputFile {
        src_path: rel.to_path_buf(),
        dest_uri: to_uri(&dest_path),
        abs_dest_path: site_dir.join(&dest_path),
        dest_path,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn root_index_maps_to_site_root() {
        let file = output_file(Path::new("index.md"), Path::new("/site"));
        assert_eq!(file.dest_path, PathBuf::from("index.html"));
        assert_eq!(file.dest_uri, "index.html");
        assert_eq!(file.url, "");
        assert_eq!(file.abs_dest_path, PathBuf::from("/site/index.html"));
    }

    #[test]
    fn nested_index_maps_to_directory() {
        let file = output_file(Path::new("01_guide/index.md"), Path::new("/site"));
        assert_eq!(file.dest_uri, "01_guide/index.html");
        assert_eq!(file.url, "01_guide/");
    }

    #[test]
    fn page_gets_own_directory() {
        let file = output_file(Path::new("01_guide/02_setup.md"), Path::new("/site"));
        assert_eq!(file.dest_uri, "01_guide/02_setup/index.html");
        assert_eq!(file.url, "01_guide/02_setup/");
        assert_eq!(file.src_path, PathBuf::from("01_guide/02_setup.md"));
    }

    #[test]
    fn collects_matching_files_in_name_order() {
        let tmp = TempDir::new().unwrap();
        make_tree(
            tmp.path(),
            &["b.md", "a.md", "notes.txt", "sub/c.md", ".hidden/d.md"],
        );

        let files = collect_files(tmp.path(), Path::new("/site"), ".md").unwrap();
        let sources: Vec<String> = files.iter().map(|f| to_uri(&f.src_path)).collect();
        assert_eq!(sources, vec!["a.md", "b.md", "sub/c.md"]);
    }

    #[test]
    fn collected_then_renamed_fixtures() {
        let tmp = setup_fixtures();
        let files = collect_files(tmp.path(), Path::new("/site"), ".md").unwrap();
        let urls: Vec<String> = files
            .iter()
            .map(|f| crate::paths::rename_file(f).url)
            .collect();

        assert!(urls.contains(&"blog/".to_string()));
        assert!(urls.contains(&"guide_/details/".to_string()));
        assert!(urls.contains(&String::new()));
        assert!(urls.iter().all(|u| !u.contains("00_") && !u.contains("01_")));
    }

    #[test]
    fn missing_docs_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = collect_files(&tmp.path().join("missing"), Path::new("/site"), ".md");
        assert!(result.is_err());
    }
}
