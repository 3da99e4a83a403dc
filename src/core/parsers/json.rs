use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::core::Node;

/// Parse the content of a locale file. The root must be a JSON object.
pub fn parse_tree(content: &str, path: &Path) -> Result<Node> {
    let node: Node = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
    if !node.is_container() {
        bail!("Root of JSON file must be an object: {}", path.display());
    }
    Ok(node)
}

/// Read and parse a locale file.
pub fn load_tree(path: &Path) -> Result<Node> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    parse_tree(&content, path)
}

/// Read a locale file, or start from an empty tree when it does not exist.
pub fn load_tree_or_empty(path: &Path) -> Result<Node> {
    if path.exists() {
        load_tree(path)
    } else {
        Ok(Node::empty())
    }
}
