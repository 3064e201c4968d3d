use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    cli::args::{CommonArgs, LocaleListArgs, SourceArgs},
    config::{ResolvedConfig, load_config},
    core::locale::{LocaleFile, ensure_locales_dir, fixed_locale_files},
};

/// Configuration shared by every command runner: the config file merged with
/// command-line overrides.
pub struct CommandContext {
    /// Directory the command runs in; command-line paths are relative to it.
    pub dir: PathBuf,
    pub config: ResolvedConfig,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::from_dir(&cwd, common)
    }

    /// Load the config found from `dir` and apply `common` overrides.
    ///
    /// Override paths are relative to `dir`, config paths to the config file.
    pub fn from_dir(dir: &Path, common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(dir)?;
        let mut config = ResolvedConfig::resolve(loaded.config, &loaded.root)?;

        if let Some(locales_dir) = &common.locales_dir {
            config.locales_dir = dir.join(locales_dir);
        }
        if let Some(base_locale) = &common.base_locale {
            config.base_locale = base_locale.clone();
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
        })
    }

    pub fn with_source(mut self, source: &SourceArgs) -> Self {
        if let Some(source_root) = &source.source_root {
            self.config.source_root = self.dir.join(source_root);
        }
        self
    }

    pub fn with_locales(mut self, locales: &LocaleListArgs) -> Self {
        if !locales.locales.is_empty() {
            self.config.locales = locales.locales.clone();
        }
        self
    }

    /// The fixed locale list resolved to files.
    pub fn locale_files(&self) -> Vec<LocaleFile> {
        fixed_locale_files(&self.config.locales_dir, &self.config.locales)
    }

    /// Fail unless the configured locales directory exists.
    pub fn require_locales_dir(&self) -> Result<()> {
        ensure_locales_dir(&self.config.locales_dir)
    }
}
