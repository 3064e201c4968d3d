//! Removal of unused key paths from locale documents.

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use super::{
    flatten::join_path,
    locale::{LocaleFile, load_document},
};

/// Result of pruning one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    pub file: LocaleFile,
    /// Character count of the compact serialization before pruning.
    pub size_before: usize,
    /// Character count of the compact serialization after pruning.
    pub size_after: usize,
    /// Whether the file was rewritten (false on dry runs).
    pub written: bool,
}

impl PruneOutcome {
    pub fn removed_chars(&self) -> usize {
        self.size_before.saturating_sub(self.size_after)
    }
}

/// Remove every entry whose full path is in `keys`.
///
/// A matching path cuts its whole subtree. Objects that are empty after
/// cleaning are dropped from their parent. Arrays and scalars are kept as-is, so a path
/// pointing inside an array element never matches. Surviving keys keep their
/// original order.
pub fn remove_keys(value: Value, keys: &HashSet<String>) -> Value {
    match value {
        Value::Object(map) => Value::Object(remove_from_object(map, keys, "")),
        other => other,
    }
}

fn remove_from_object(
    map: Map<String, Value>,
    keys: &HashSet<String>,
    prefix: &str,
) -> Map<String, Value> {
    let mut cleaned = Map::new();
    for (key, value) in map {
        let path = join_path(prefix, &key);
        if keys.contains(&path) {
            continue;
        }
        match value {
            Value::Object(child) => {
                let child = remove_from_object(child, keys, &path);
                if !child.is_empty() {
                    cleaned.insert(key, Value::Object(child));
                }
            }
            other => {
                cleaned.insert(key, other);
            }
        }
    }
    cleaned
}

/// Pretty JSON with 2-space indentation and a trailing newline.
///
/// Non-ASCII text is written as-is.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Size metric used in prune reports: characters of the compact serialization.
pub fn compact_size(value: &Value) -> Result<usize> {
    let compact = serde_json::to_string(value).context("Failed to serialize JSON")?;
    Ok(compact.chars().count())
}

/// Prune one locale file, rewriting it unless `dry_run` is set.
pub fn prune_file(
    file: &LocaleFile,
    keys: &HashSet<String>,
    dry_run: bool,
) -> Result<PruneOutcome> {
    let document = load_document(&file.path)?;
    let size_before = compact_size(&document)?;
    let cleaned = remove_keys(document, keys);
    let size_after = compact_size(&cleaned)?;

    if !dry_run {
        fs::write(&file.path, to_pretty_json(&cleaned)?)
            .with_context(|| format!("Failed to write file: {}", file.path.display()))?;
    }

    Ok(PruneOutcome {
        file: file.clone(),
        size_before,
        size_after,
        written: !dry_run,
    })
}

/// Prune every existing file of the fixed locale list.
///
/// Files that do not exist are skipped. All documents are parsed before any
/// file is written, so a malformed file leaves every file untouched.
pub fn prune_locales(
    files: &[LocaleFile],
    keys: &HashSet<String>,
    dry_run: bool,
) -> Result<Vec<PruneOutcome>> {
    let existing: Vec<&LocaleFile> = files.iter().filter(|f| f.exists()).collect();
    for file in &existing {
        load_document(&file.path)?;
    }
    existing
        .into_iter()
        .map(|file| prune_file(file, keys, dry_run))
        .collect()
}

/// Parse a key list: a JSON array of strings, or one key per line where blank
/// lines and `#` comments are ignored.
pub fn parse_key_list(content: &str) -> Result<Vec<String>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let keys: Vec<String> = serde_json::from_str(trimmed)
            .context("Key list looks like JSON but is not an array of strings")?;
        return Ok(keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect());
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Read a key list file.
pub fn load_key_list(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        bail!(
            "Key list file '{}' not found.\n\
             Hint: Pass --keys-file or --key, or set 'unusedKeysFile' in .i18nkeysrc.json.",
            path.display()
        );
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key list: {}", path.display()))?;
    parse_key_list(&content).with_context(|| format!("Invalid key list: {}", path.display()))
}

/// Render keys in the plain-text key list format.
pub fn format_key_list(keys: &[String]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(key);
        out.push('\n');
    }
    out
}
