//! # gen-nav
//!
//! Generates a documentation site's navigation from its content directory, so
//! nobody has to maintain a nav list by hand. Directories become sections,
//! content files become pages, and names carry their own ordering.
//!
//! # Architecture: Two Hooks
//!
//! The crate is a plugin for a static-site build pipeline and acts at two
//! points of a build:
//!
//! ```text
//! 1. Config ready      docs/        →  nav tree      (filesystem → nested entries)
//! 2. Files discovered  output files →  output files  (ordering prefixes removed)
//! ```
//!
//! Both are plain functions collected in [`plugin::HOOKS`]. The host calls
//! them directly; there is no plugin base type to implement.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Snapshots the content root and builds the nav tree from it |
//! | [`naming`] | `NN_name` prefix stripping, index markers, title formatting |
//! | [`paths`] | Public path normalization and the per-file rename |
//! | [`plugin`] | The two pipeline hooks and the host-side config they touch |
//! | [`config`] | `gen-nav.toml` loading, merging, and validation |
//! | [`collect`] | Output file discovery for the command-line host |
//! | [`types`] | `NavEntry` (with its host wire shape) and `OutputFile` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Sorting by Raw Name
//!
//! Entries are ordered by their on-disk name compared byte by byte. A
//! two-digit `NN_` prefix is therefore all it takes to order pages, and it is
//! removed from titles and public URLs. Unprefixed names still sort
//! alphabetically among themselves.
//!
//! ## Snapshot, Then Build
//!
//! The content root is read once into an immutable [`scan::ContentNode`]
//! tree and the nav is computed from that. The builder is pure, which keeps
//! the edge cases testable without a filesystem.
//!
//! ## Fail the Build on Broken Markers
//!
//! A directory named `name_/` promises an `index` page. When it is missing
//! the whole build stops with the expected path, rather than producing a nav
//! that silently drops a section.

pub mod collect;
pub mod config;
pub mod naming;
pub mod output;
pub mod paths;
pub mod plugin;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
