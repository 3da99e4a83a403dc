//! Curated translation table used by the merge command.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

/// Known-correct target strings, keyed by key name.
///
/// Entries match a key name at any depth of the tree, not a dotted path.
/// The table is read once and never mutated during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a table from a flat JSON object of string values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation table: {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse translation table (expected an object of strings): {}",
                path.display()
            )
        })?;
        Ok(Self { entries })
    }

    /// Translation for `key`. Empty entries are treated as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
