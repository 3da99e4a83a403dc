//! Dotted key path collection and comparison.

use std::collections::BTreeSet;

use super::tree::{Children, Node};

/// Join a parent path and a key with `.`.
pub fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Collect every dotted key path reachable from `node`.
///
/// Container paths are included alongside leaf paths, so
/// `{"a": {"b": "x"}}` yields `{"a", "a.b"}`. A leaf root yields nothing.
pub fn collect_keys(node: &Node, prefix: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    if let Node::Container(children) = node {
        collect_into(children, prefix, &mut keys);
    }
    keys
}

fn collect_into(children: &Children, prefix: &str, keys: &mut BTreeSet<String>) {
    for (key, child) in children {
        let full_key = join_key(prefix, key);
        if let Node::Container(grandchildren) = child {
            collect_into(grandchildren, &full_key, keys);
        }
        keys.insert(full_key);
    }
}

/// Paths present in `reference` that `target` does not have, sorted.
pub fn missing_keys(reference: &Node, target: &Node) -> BTreeSet<String> {
    let target_keys = collect_keys(target, "");
    collect_keys(reference, "")
        .into_iter()
        .filter(|key| !target_keys.contains(key))
        .collect()
}

/// Top-level keys of `reference` absent from `target`, in reference order.
///
/// Unlike [`missing_keys`] this does not descend into nested containers: a
/// top-level key present in both trees is never reported, whatever it holds.
pub fn missing_top_level<'a>(reference: &'a Node, target: &Node) -> Vec<(&'a str, &'a Node)> {
    let Some(children) = reference.as_children() else {
        return Vec::new();
    };
    children
        .iter()
        .filter(|(key, _)| target.get(key).is_none())
        .map(|(key, node)| (key.as_str(), node))
        .collect()
}
