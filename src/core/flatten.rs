//! Flattening of nested locale documents into dot-separated key paths.

use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use serde_json::Value;

/// How arrays inside a locale document contribute to the flattened keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ArrayPolicy {
    /// Expand arrays with their 0-based index as a path segment
    /// (e.g. `faq.items.0.question`).
    Descend,
    /// Stop at arrays: an array and everything inside it contributes no keys.
    Skip,
}

/// Flattened document: key path -> original leaf value.
pub type FlatKeys = BTreeMap<String, Value>;

/// Flatten a JSON document into a mapping of dot-separated paths to leaf values.
///
/// Objects contribute `prefix.key`, arrays (under [`ArrayPolicy::Descend`])
/// contribute `prefix.index`. A scalar root has no path and yields nothing,
/// as do empty objects and empty arrays.
pub fn flatten(value: &Value, policy: ArrayPolicy) -> FlatKeys {
    let mut out = FlatKeys::new();
    flatten_into(value, "", policy, &mut out);
    out
}

/// Flatten a document and keep only its key paths.
pub fn key_set(value: &Value, policy: ArrayPolicy) -> BTreeSet<String> {
    flatten(value, policy).into_keys().collect()
}

/// Join a parent path and a segment.
pub fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn flatten_into(value: &Value, prefix: &str, policy: ArrayPolicy, out: &mut FlatKeys) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                visit_child(child, join_path(prefix, key), policy, out);
            }
        }
        Value::Array(items) => {
            if policy == ArrayPolicy::Skip {
                return;
            }
            for (index, child) in items.iter().enumerate() {
                visit_child(child, join_path(prefix, &index.to_string()), policy, out);
            }
        }
        _ => {}
    }
}

fn visit_child(child: &Value, path: String, policy: ArrayPolicy, out: &mut FlatKeys) {
    match child {
        Value::Object(_) | Value::Array(_) => flatten_into(child, &path, policy, out),
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
}
