//! Site configuration module.
//!
//! Handles loading and validating `gen-nav.toml`. The file plays
//! the part of the host's configuration: where the content lives, an optional
//! hand-written nav, and the plugin's own two settings.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! docs_dir = "docs"         # Content root, relative to the config file
//! site_dir = "site"         # Output root, relative to the config file
//! nav = []                  # Hand-written entries; generated ones are appended
//!
//! [gen_nav]
//! enabled = true            # false = leave the nav untouched, rename nothing
//! nav_include = ".md"       # Only files ending with this suffix become pages
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [gen_nav]
//! nav_include = ".rst"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::plugin::HostConfig;
use crate::types::NavEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `gen-nav.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content root, relative to the config file.
    pub docs_dir: String,
    /// Output root, relative to the config file.
    pub site_dir: String,
    /// Hand-written navigation. Generated entries are appended when non-empty.
    pub nav: Vec<NavEntry>,
    /// Plugin settings.
    pub gen_nav: GenNavConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_dir: "docs".to_string(),
            site_dir: "site".to_string(),
            nav: Vec::new(),
            gen_nav: GenNavConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.docs_dir.is_empty() {
            return Err(ConfigError::Validation("docs_dir must not be empty".into()));
        }
        if self.gen_nav.nav_include.is_empty() {
            return Err(ConfigError::Validation(
                "gen_nav.nav_include must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build the host-side view the plugin hooks operate on.
    ///
    /// `base` is the directory relative paths are resolved against, usually
    /// the directory holding the config file.
    pub fn host_config(&self, base: &Path) -> HostConfig {
        HostConfig {
            docs_dir: base.join(&self.docs_dir),
            nav: (!self.nav.is_empty()).then(|| self.nav.clone()),
        }
    }
}

/// Settings read by the navigation plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenNavConfig {
    /// When false neither hook does anything.
    pub enabled: bool,
    /// File-name suffix a content file needs to appear in the nav.
    pub nav_include: String,
}

impl Default for GenNavConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            nav_include: ".md".to_string(),
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from the given file, falling back to defaults when absent.
///
/// Missing keys take their defaults, unknown keys are rejected, and the
/// result is validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<SiteConfig>(&content)?
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        SiteConfig::default()
    };
    config.validate()?;
    tracing::debug!(path = %path.display(), docs_dir = %config.docs_dir, "Config loaded");
    Ok(config)
}

/// Returns a fully-commented stock `gen-nav.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gen-nav Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Content root, relative to this file.
docs_dir = "docs"

# Output root, relative to this file. Only used to compute destination paths.
site_dir = "site"

# Hand-written navigation entries. When non-empty, the generated navigation
# is appended after them; otherwise the generated navigation is used as-is.
# nav = [{ Home = "index.md" }]

# ---------------------------------------------------------------------------
# Navigation generation
# ---------------------------------------------------------------------------
[gen_nav]
# Set to false to leave the navigation and output paths untouched.
enabled = true

# Only files whose name ends with this suffix become navigation pages.
#
# Naming rules for files and directories under docs_dir:
#   01_name      two digits + underscore: sort order only, hidden in titles/URLs
#   _name        ignored entirely
#   name_/       directory shown as one page linking to name_/index.md
#   index.md     ignored at the root (the landing page), kept elsewhere
nav_include = ".md"
"##
}
