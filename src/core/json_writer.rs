use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::Node;

/// Save a tree as pretty JSON.
///
/// Uses 2-space indentation, keeps non-ASCII characters unescaped and adds a
/// trailing newline. Parent directories are created when missing.
pub fn save_tree(path: &Path, tree: &Node) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(tree).context("Failed to serialize JSON")?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
