//! Heuristic discovery of translation keys referenced from source files.
//!
//! Keys are found with a pattern over raw text: a call to `t(...)` or
//! `<name>.t(...)` whose argument is a quoted literal made of word characters,
//! dots and hyphens. [`CallShape`] decides whether further arguments are
//! allowed after the literal. Keys assembled at runtime (concatenation,
//! template strings, variables) are not seen, and unrelated functions that
//! happen to be called `t` are counted.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Result, bail};
use glob::Pattern;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use super::{
    flatten::{ArrayPolicy, key_set},
    locale::{LocaleFile, load_document},
    missing::{LocaleMissing, missing_keys},
};

static SINGLE_ARGUMENT_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:[A-Za-z_$][\w$]*\.)?t\(\s*(?:"([\w.-]+)"|'([\w.-]+)')\s*\)"#).unwrap()
});

static FIRST_ARGUMENT_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:[A-Za-z_$][\w$]*\.)?t\(\s*(?:"([\w.-]+)"|'([\w.-]+)')\s*[,)]"#).unwrap()
});

/// Which translation calls count as a reference to a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallShape {
    /// `t("key")` only; calls with more arguments are not seen.
    #[default]
    SingleArgument,
    /// `t("key")` and `t("key", ...)`.
    FirstArgument,
}

impl CallShape {
    fn regex(self) -> &'static Regex {
        match self {
            CallShape::SingleArgument => &SINGLE_ARGUMENT_CALL_REGEX,
            CallShape::FirstArgument => &FIRST_ARGUMENT_CALL_REGEX,
        }
    }
}

/// What to scan below the source root.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions (without the dot) of files to read.
    pub extensions: Vec<String>,
    /// Directory names skipped entirely, wherever they appear.
    pub ignore_dirs: Vec<String>,
    /// Glob patterns matched against full paths.
    pub ignores: Vec<Pattern>,
}

/// A source path that could not be read.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct SourceScan {
    pub calls: CallShape,
    pub keys: BTreeSet<String>,
    /// Files that were read, in walk order.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

/// Outcome of checking one entry of the fixed locale list.
#[derive(Debug)]
pub enum LocaleCheck {
    /// The file does not exist; nothing was checked.
    Skipped(LocaleFile),
    Checked(LocaleMissing),
}

/// Extract every literal key passed to a translation call of the given shape.
pub fn extract_keys(text: &str, calls: CallShape) -> impl Iterator<Item = &str> {
    calls.regex().captures_iter(text).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
    })
}

/// Walk `root` and collect the keys referenced from every matching file.
///
/// Unreadable files and directories are recorded as warnings and skipped.
pub fn scan_source_tree(
    root: &Path,
    options: &ScanOptions,
    calls: CallShape,
) -> Result<SourceScan> {
    if !root.is_dir() {
        bail!(
            "Source root '{}' does not exist or is not a directory.\n\
             Hint: Check your .i18nkeysrc.json 'sourceRoot' setting.",
            root.display()
        );
    }

    let mut scan = SourceScan {
        calls,
        ..Default::default()
    };
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, &options.ignore_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                scan.warnings.push(ScanWarning {
                    path: e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                    error: e.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_source_file(path, &options.extensions) {
            continue;
        }
        let path_str = path.to_string_lossy();
        if options.ignores.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(text) => {
                scan.keys.extend(extract_keys(&text, calls).map(String::from));
                scan.files.push(path.to_path_buf());
            }
            Err(e) => scan.warnings.push(ScanWarning {
                path: path_str.into_owned(),
                error: e.to_string(),
            }),
        }
    }

    Ok(scan)
}

/// Check each locale of the fixed list for keys used in code but absent from it.
///
/// Missing files are skipped; a malformed file fails the whole check.
pub fn compare_with_source(
    files: &[LocaleFile],
    code_keys: &BTreeSet<String>,
    policy: ArrayPolicy,
) -> Result<Vec<LocaleCheck>> {
    let mut checks = Vec::with_capacity(files.len());
    for file in files {
        if !file.exists() {
            checks.push(LocaleCheck::Skipped(file.clone()));
            continue;
        }
        let keys = key_set(&load_document(&file.path)?, policy);
        checks.push(LocaleCheck::Checked(LocaleMissing {
            file: file.clone(),
            missing: missing_keys(code_keys, &keys),
        }));
    }
    Ok(checks)
}

/// Keys defined in the base locale that no source file references, sorted.
pub fn unused_keys(
    base: &LocaleFile,
    code_keys: &BTreeSet<String>,
    policy: ArrayPolicy,
) -> Result<Vec<String>> {
    if !base.exists() {
        bail!(
            "Base locale file '{}' not found.\n\
             Hint: Check your .i18nkeysrc.json 'baseLocale' setting.",
            base.path.display()
        );
    }
    let base_keys = key_set(&load_document(&base.path)?, policy);
    Ok(missing_keys(&base_keys, code_keys))
}

fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.iter().any(|d| d == name))
}

fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
