use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{locale::LocaleFile, source_scan::ScanOptions};

pub const CONFIG_FILE_NAME: &str = ".i18nkeysrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_unused_keys_file")]
    pub unused_keys_file: String,
}

fn default_locales_dir() -> String {
    "frontend/src/assets/locales".to_string()
}

fn default_base_locale() -> String {
    "en_US".to_string()
}

fn default_source_root() -> String {
    "frontend/src".to_string()
}

fn default_locales() -> Vec<String> {
    ["en_US", "ru_RU", "zh_CN", "ja_JP", "zh_HK"]
        .map(String::from)
        .to_vec()
}

fn default_source_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx", "vue", "html"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

fn default_unused_keys_file() -> String {
    "i18n-unused-keys.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            base_locale: default_base_locale(),
            source_root: default_source_root(),
            locales: default_locales(),
            source_extensions: default_source_extensions(),
            ignore_dirs: default_ignore_dirs(),
            ignores: Vec::new(),
            unused_keys_file: default_unused_keys_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Glob patterns are checked when they are compiled, see [`Config::ignore_patterns`].
    pub fn validate(&self) -> Result<()> {
        if self.source_extensions.is_empty() {
            bail!("'sourceExtensions' must list at least one file extension.");
        }

        if self.base_locale.trim().is_empty() {
            bail!("'baseLocale' must not be empty.");
        }

        Ok(())
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in the config resolve against.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult { config, root })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
        }),
    }
}

/// Configuration with every path resolved against the project root.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub locales_dir: PathBuf,
    pub base_locale: String,
    pub source_root: PathBuf,
    pub locales: Vec<String>,
    pub scan: ScanOptions,
    pub unused_keys_file: PathBuf,
}

impl ResolvedConfig {
    /// Validate `config` and resolve its paths against `root`.
    pub fn resolve(config: Config, root: &Path) -> Result<Self> {
        config.validate()?;
        let ignores = config.ignore_patterns()?;
        Ok(Self {
            locales_dir: root.join(&config.locales_dir),
            base_locale: config.base_locale,
            source_root: root.join(&config.source_root),
            locales: config.locales,
            scan: ScanOptions {
                extensions: config
                    .source_extensions
                    .iter()
                    .map(|e| e.trim_start_matches('.').to_string())
                    .collect(),
                ignore_dirs: config.ignore_dirs,
                ignores,
            },
            unused_keys_file: root.join(&config.unused_keys_file),
        })
    }

    pub fn base_file(&self) -> LocaleFile {
        LocaleFile::new(&self.locales_dir, &self.base_locale)
    }
}
