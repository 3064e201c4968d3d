use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// A locale JSON file on disk, e.g. `locales/en_US.json` with locale `en_US`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub locale: String,
    pub path: PathBuf,
}

impl LocaleFile {
    pub fn new(locales_dir: &Path, locale: &str) -> Self {
        let locale = locale_name(locale);
        Self {
            path: locales_dir.join(file_name(&locale)),
            locale,
        }
    }

    /// File name as shown in reports (`en_US.json`).
    pub fn file_name(&self) -> String {
        file_name(&self.locale)
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Normalize a configured locale entry: `"en_US.json"` and `"en_US"` both give `"en_US"`.
pub fn locale_name(entry: &str) -> String {
    entry.strip_suffix(".json").unwrap_or(entry).to_string()
}

fn file_name(locale: &str) -> String {
    format!("{}.json", locale)
}

/// Read and parse one locale document.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Ensure the locales directory exists before any file is touched.
pub fn ensure_locales_dir(locales_dir: &Path) -> Result<()> {
    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .i18nkeysrc.json 'localesDir' setting.",
            locales_dir.display()
        );
    }
    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }
    Ok(())
}

/// List every `*.json` file of the locales directory, sorted by file name.
pub fn list_locale_files(locales_dir: &Path) -> Result<Vec<LocaleFile>> {
    ensure_locales_dir(locales_dir)?;

    let mut files = Vec::new();
    let entries = fs::read_dir(locales_dir)
        .with_context(|| format!("Failed to read directory: {}", locales_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = path.file_stem().and_then(|s| s.to_str())
        {
            files.push(LocaleFile {
                locale: locale.to_string(),
                path,
            });
        }
    }
    files.sort_by_key(|f| f.file_name());
    Ok(files)
}

/// Resolve a fixed list of locales against the locales directory.
///
/// Entries are deduplicated, keeping the first occurrence. Files are not
/// required to exist.
pub fn fixed_locale_files(locales_dir: &Path, locales: &[String]) -> Vec<LocaleFile> {
    let mut files: Vec<LocaleFile> = Vec::new();
    for entry in locales {
        let file = LocaleFile::new(locales_dir, entry);
        if !files.iter().any(|f| f.locale == file.locale) {
            files.push(file);
        }
    }
    files
}
