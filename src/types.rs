//! Shared types handed between the nav builder, the plugin hooks and the host.
//!
//! The serialized shape of [`NavEntry`] is what static-site hosts expect in
//! their `nav` setting and must not change: every entry is a single-key map
//! from title to either a path or a nested list of entries.
//!
//! ```json
//! [
//!   {"Dir1": [{"File1": "dir1/file1.md"}]},
//!   {"About": "about.md"}
//! ]
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// One navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub target: NavTarget,
}

/// What a navigation item points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavTarget {
    /// Path to a content file, relative to the content root, `/`-separated.
    Page(String),
    /// Nested entries of a directory.
    Section(Vec<NavEntry>),
}

impl NavEntry {
    pub fn page(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: NavTarget::Page(path.into()),
        }
    }

    pub fn section(title: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            title: title.into(),
            target: NavTarget::Section(children),
        }
    }

    /// Child entries, empty for pages.
    pub fn children(&self) -> &[NavEntry] {
        match &self.target {
            NavTarget::Section(children) => children,
            NavTarget::Page(_) => &[],
        }
    }

    /// Target path, `None` for sections.
    pub fn path(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Page(path) => Some(path),
            NavTarget::Section(_) => None,
        }
    }
}

impl Serialize for NavEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.target)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for NavEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = NavEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a single-key map of title to path or list of entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NavEntry, A::Error> {
                let (title, target) = map
                    .next_entry::<String, NavTarget>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(format!(
                        "nav entry '{title}' has more than one key"
                    )));
                }
                Ok(NavEntry { title, target })
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

/// An output file discovered by the host.
///
/// Mirrors the four path properties a host exposes per file, plus the source
/// path it came from. The rename hook returns a new record instead of
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Source path relative to the content root (never rewritten).
    pub src_path: PathBuf,
    /// Destination relative to the site directory, native separators.
    pub dest_path: PathBuf,
    /// Destination relative to the site directory, `/`-separated.
    pub dest_uri: String,
    /// Public URL of the page, `/`-separated.
    pub url: String,
    /// Absolute destination on disk.
    pub abs_dest_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NavEntry> {
        vec![
            NavEntry::section(
                "Dir1",
                vec![
                    NavEntry::page("File1", "dir1/file1.md"),
                    NavEntry::page("File2", "dir1/file2.md"),
                ],
            ),
            NavEntry::page("About", "about.md"),
        ]
    }

    #[test]
    fn serializes_as_single_key_maps() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"Dir1": [{"File1": "dir1/file1.md"}, {"File2": "dir1/file2.md"}]},
                {"About": "about.md"}
            ])
        );
    }

    #[test]
    fn deserializes_host_nav() {
        let entries: Vec<NavEntry> =
            serde_json::from_str(r#"[{"Home": "index.md"}, {"Guide": [{"Intro": "guide/intro.md"}]}]"#)
                .unwrap();
        assert_eq!(entries[0], NavEntry::page("Home", "index.md"));
        assert_eq!(entries[1].children()[0].path(), Some("guide/intro.md"));
    }

    #[test]
    fn deserializes_from_toml_inline_tables() {
        #[derive(Deserialize)]
        struct Wrapper {
            nav: Vec<NavEntry>,
        }
        let w: Wrapper = toml::from_str(r#"nav = [{ Home = "index.md" }]"#).unwrap();
        assert_eq!(w.nav, vec![NavEntry::page("Home", "index.md")]);
    }

    #[test]
    fn rejects_multi_key_entry() {
        let result: Result<Vec<NavEntry>, _> =
            serde_json::from_str(r#"[{"A": "a.md", "B": "b.md"}]"#);
        assert!(result.unwrap_err().to_string().contains("more than one key"));
    }

    #[test]
    fn rejects_empty_entry() {
        let result: Result<Vec<NavEntry>, _> = serde_json::from_str("[{}]");
        assert!(result.is_err());
    }

    #[test]
    fn page_has_no_children() {
        let page = NavEntry::page("About", "about.md");
        assert!(page.children().is_empty());
        assert_eq!(page.path(), Some("about.md"));
    }
}
