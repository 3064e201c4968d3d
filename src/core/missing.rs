//! Missing-key computation shared by the base-locale and source-scan reports.

use std::{collections::BTreeSet, path::Path};

use anyhow::{Result, bail};

use super::{
    flatten::{ArrayPolicy, key_set},
    locale::{LocaleFile, list_locale_files, load_document},
};

/// Missing keys for one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMissing {
    pub file: LocaleFile,
    /// Sorted lexicographically.
    pub missing: Vec<String>,
}

impl LocaleMissing {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of comparing every sibling locale against the base locale.
#[derive(Debug)]
pub struct BaseComparison {
    pub base: LocaleFile,
    pub base_key_count: usize,
    /// One entry per sibling locale, ordered by file name.
    pub locales: Vec<LocaleMissing>,
}

impl BaseComparison {
    pub fn has_missing(&self) -> bool {
        self.locales.iter().any(|l| !l.is_complete())
    }
}

/// Keys of `expected` absent from `actual`, sorted.
pub fn missing_keys(expected: &BTreeSet<String>, actual: &BTreeSet<String>) -> Vec<String> {
    expected.difference(actual).cloned().collect()
}

/// Compare every `*.json` file of `locales_dir` against the base locale.
///
/// Fails before loading anything when the directory or the base file is
/// missing, and fails the whole comparison on the first malformed file.
pub fn compare_with_base(
    locales_dir: &Path,
    base_locale: &str,
    policy: ArrayPolicy,
) -> Result<BaseComparison> {
    let files = list_locale_files(locales_dir)?;
    let base = LocaleFile::new(locales_dir, base_locale);
    if !base.exists() {
        bail!(
            "Base locale file '{}' not found in '{}'.\n\
             Hint: Check your .i18nkeysrc.json 'baseLocale' setting.",
            base.file_name(),
            locales_dir.display()
        );
    }

    let base_keys = key_set(&load_document(&base.path)?, policy);

    let mut locales = Vec::new();
    for file in files {
        if file.locale == base.locale {
            continue;
        }
        let keys = key_set(&load_document(&file.path)?, policy);
        locales.push(LocaleMissing {
            missing: missing_keys(&base_keys, &keys),
            file,
        });
    }

    Ok(BaseComparison {
        base,
        base_key_count: base_keys.len(),
        locales,
    })
}
