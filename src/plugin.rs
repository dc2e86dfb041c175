//! Build-pipeline hooks.
//!
//! A host drives the plugin through two events, exposed as a plain record of
//! callbacks in [`HOOKS`]:
//!
//! | Event | Callback | Effect |
//! |-------|----------|--------|
//! | config ready | [`on_config_ready`] | walks `docs_dir`, installs the generated nav |
//! | files discovered | [`on_files_discovered`] | returns renamed copies of the output files |
//!
//! Both callbacks read [`GenNavConfig`]; when `enabled` is false they leave
//! everything as it was.

use crate::config::GenNavConfig;
use crate::paths::rename_file;
use crate::scan::{self, ScanError};
use crate::types::{NavEntry, OutputFile};
use std::path::PathBuf;

/// The part of the host configuration the plugin reads and writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfig {
    /// Content root.
    pub docs_dir: PathBuf,
    /// The host's navigation slot. `None` means no nav was configured.
    pub nav: Option<Vec<NavEntry>>,
}

/// Callbacks the host invokes at the matching pipeline events.
#[derive(Clone, Copy)]
pub struct PipelineHooks {
    pub on_config_ready: fn(&GenNavConfig, &mut HostConfig) -> Result<(), ScanError>,
    pub on_files_discovered: fn(&GenNavConfig, &[OutputFile]) -> Vec<OutputFile>,
}

pub const HOOKS: PipelineHooks = PipelineHooks {
    on_config_ready,
    on_files_discovered,
};

/// Generate the navigation and install it into the host's nav slot.
///
/// A non-empty nav is extended; an absent or empty one is replaced. Any
/// error aborts the build, nothing is installed in that case.
pub fn on_config_ready(settings: &GenNavConfig, host: &mut HostConfig) -> Result<(), ScanError> {
    if !settings.enabled {
        tracing::debug!("Navigation generation disabled");
        return Ok(());
    }

    let generated = scan::build_nav(&host.docs_dir, &settings.nav_include)?;
    tracing::info!(
        docs_dir = %host.docs_dir.display(),
        entries = generated.len(),
        "Generated navigation"
    );

    match host.nav.as_mut() {
        Some(existing) if !existing.is_empty() => existing.extend(generated),
        _ => host.nav = Some(generated),
    }
    Ok(())
}

/// Return the public version of every discovered output file.
pub fn on_files_discovered(settings: &GenNavConfig, files: &[OutputFile]) -> Vec<OutputFile> {
    if !settings.enabled {
        return files.to_vec();
    }

    let renamed: Vec<OutputFile> = files.iter().map(rename_file).collect();
    let changed = files
        .iter()
        .zip(&renamed)
        .filter(|(before, after)| before != after)
        .count();
    tracing::info!(files = files.len(), changed, "Renamed output files");
    renamed
}
