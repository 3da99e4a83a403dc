//! Flat `key ||| value` text reports.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Separator between key and value on a report line.
pub const SEPARATOR: &str = " ||| ";

/// One line of a key report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub key: String,
    pub value: String,
}

impl ReportEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Render entries, one newline-terminated line each.
pub fn render(entries: &[ReportEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}{}{}\n", entry.key, SEPARATOR, entry.value))
        .collect()
}

/// Write (or overwrite) a report file. An empty entry list produces an empty file.
pub fn write_key_report(path: &Path, entries: &[ReportEntry]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, render(entries))
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
