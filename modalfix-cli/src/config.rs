//! Configuration file loading for modalfix.
//!
//! Discovers and loads `modalfix.toml` from the source root (or its parent,
//! the usual project root). Merges config file settings with CLI arguments;
//! CLI takes precedence.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use modalfix_core::{MigrateSettings, Passes};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "modalfix.toml";

/// Top-level configuration from modalfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModalfixConfig {
    /// Corpus selection (extensions, ignored subtrees and files).
    pub corpus: CorpusConfig,

    /// Wiring insertion settings.
    pub wiring: WiringConfig,
}

/// Corpus section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Replaces the default component-file extensions when non-empty.
    pub extensions: Vec<String>,

    /// Extra directory names pruned from the walk.
    pub ignore_dirs: Vec<String>,

    /// Extra file names never touched.
    pub ignore_files: Vec<String>,
}

/// Wiring section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Module the `useModal` hook is imported from.
    pub module_path: Option<String>,
}

/// Discover the modalfix.toml config file.
///
/// Searches the source root first, then its parent (the usual project root).
pub fn discover_config(src_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut candidates = vec![src_root.join(CONFIG_FILE_NAME)];
    if let Some(parent) = src_root.parent() {
        candidates.push(parent.join(CONFIG_FILE_NAME));
    }
    for candidate in candidates {
        if candidate.exists() {
            debug!("found config file at {}", candidate);
            return Some(candidate);
        }
    }
    debug!("no config file found near {}", src_root);
    None
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ModalfixConfig> {
    let config: ModalfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from near the source root, or return default if not found.
pub fn load_or_default(src_root: &Utf8Path) -> anyhow::Result<ModalfixConfig> {
    match discover_config(src_root) {
        Some(path) => {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read config file {}", path))?;
            parse_config(&contents).with_context(|| format!("parse config file {}", path))
        }
        None => Ok(ModalfixConfig::default()),
    }
}

/// Builds run settings from config-file values and CLI arguments.
///
/// CLI arguments take precedence over config file settings; list-valued
/// options extend the defaults rather than replacing them (except
/// `corpus.extensions`, which replaces when set).
pub struct ConfigMerger {
    config: ModalfixConfig,
}

impl ConfigMerger {
    pub fn new(config: ModalfixConfig) -> Self {
        Self { config }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn merge(
        self,
        src_root: Utf8PathBuf,
        dry_run: bool,
        passes: Passes,
        extra_exts: &[String],
        extra_ignore_dirs: &[String],
        extra_ignore_files: &[String],
        module_path: Option<&str>,
    ) -> MigrateSettings {
        let mut settings = MigrateSettings::new(src_root);
        settings.dry_run = dry_run;
        settings.passes = passes;

        if !self.config.corpus.extensions.is_empty() {
            settings.extensions = self.config.corpus.extensions;
        }
        settings.extensions.extend_from_slice(extra_exts);
        settings.extensions.dedup();

        settings
            .ignore_dirs
            .extend(self.config.corpus.ignore_dirs);
        settings.ignore_dirs.extend_from_slice(extra_ignore_dirs);

        settings
            .ignore_files
            .extend(self.config.corpus.ignore_files);
        settings.ignore_files.extend_from_slice(extra_ignore_files);

        if let Some(path) = module_path
            .map(str::to_string)
            .or(self.config.wiring.module_path)
        {
            settings.module_path = path;
        }

        settings
    }
}
