//! Recursive merge of reference keys into a target tree.
//!
//! Missing keys are added with the curated translation when the table has
//! one, otherwise with the reference value as a placeholder. Existing keys are
//! only overwritten when the table has a different translation for them.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    core::{
        Children, Node, SyncContext, TranslationTable,
        json_writer::save_tree,
        keys::join_key,
        parsers::json::{load_tree, load_tree_or_empty},
    },
    issues::{Issue, TypeConflictIssue},
};

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// One key written into the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeChange {
    /// Dotted path of the key.
    pub key: String,
    pub action: KeyAction,
    /// Value now stored in the target.
    pub value: String,
    /// True when the value came from the translation table.
    pub translated: bool,
}

/// A key whose shape differs between reference and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    pub key: String,
    pub reference_is_object: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub changes: Vec<MergeChange>,
    pub conflicts: Vec<MergeConflict>,
}

impl MergeReport {
    pub fn added_count(&self) -> usize {
        self.count(KeyAction::Added)
    }

    pub fn updated_count(&self) -> usize {
        self.count(KeyAction::Updated)
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    fn count(&self, action: KeyAction) -> usize {
        self.changes.iter().filter(|c| c.action == action).count()
    }
}

/// Bring `target` up to date with `reference`.
///
/// Both roots are expected to be containers; anything else is left alone.
pub fn merge_tree(reference: &Node, target: &mut Node, table: &TranslationTable) -> MergeReport {
    let mut report = MergeReport::default();
    if let (Node::Container(reference), Node::Container(target)) = (reference, target) {
        merge_children(reference, target, table, "", &mut report);
    }
    report
}

fn merge_children(
    reference: &Children,
    target: &mut Children,
    table: &TranslationTable,
    prefix: &str,
    report: &mut MergeReport,
) {
    for (key, reference_node) in reference {
        let path = join_key(prefix, key);
        let translation = table.get(key);

        match target.get_mut(key) {
            None => match reference_node {
                Node::Container(reference_children) => {
                    let mut children = Children::new();
                    merge_children(reference_children, &mut children, table, &path, report);
                    if children.is_empty() {
                        report.changes.push(MergeChange {
                            key: path,
                            action: KeyAction::Added,
                            value: "{}".to_string(),
                            translated: false,
                        });
                    }
                    target.insert(key.clone(), Node::Container(children));
                }
                Node::Leaf(value) => {
                    let node = match translation {
                        Some(text) => Node::text(text),
                        None => Node::Leaf(value.clone()),
                    };
                    debug!(key = path.as_str(), "added missing key");
                    report.changes.push(MergeChange {
                        key: path,
                        action: KeyAction::Added,
                        value: node.to_string(),
                        translated: translation.is_some(),
                    });
                    target.insert(key.clone(), node);
                }
            },
            Some(Node::Container(target_children)) if reference_node.is_container() => {
                if let Node::Container(reference_children) = reference_node {
                    merge_children(reference_children, target_children, table, &path, report);
                }
            }
            Some(existing) => match translation {
                Some(text) if existing.as_text() != Some(text) => {
                    debug!(key = path.as_str(), "replaced value with known translation");
                    *existing = Node::text(text);
                    report.changes.push(MergeChange {
                        key: path,
                        action: KeyAction::Updated,
                        value: text.to_string(),
                        translated: true,
                    });
                }
                Some(_) => {}
                None => {
                    if reference_node.is_container() != existing.is_container() {
                        report.conflicts.push(MergeConflict {
                            key: path,
                            reference_is_object: reference_node.is_container(),
                        });
                    }
                }
            },
        }
    }
}

/// Outcome of merging one resource file.
#[derive(Debug)]
pub struct MergeOutcome {
    pub resource: String,
    pub target_path: PathBuf,
    /// The target file did not exist before the merge.
    pub created: bool,
    /// The target file was rewritten.
    pub written: bool,
    pub dry_run: bool,
    pub report: MergeReport,
    pub issues: Vec<Issue>,
}

/// Merge the reference file of `resource` into its target file.
///
/// The target starts empty when its file does not exist. The file is only
/// written when at least one key was added or updated, and never in dry-run
/// mode. Read and parse failures are returned to the caller.
pub fn merge_resource(
    ctx: &SyncContext,
    resource: &str,
    table: &TranslationTable,
    dry_run: bool,
) -> Result<MergeOutcome> {
    let reference = load_tree(&ctx.reference_path(resource))?;
    let target_path = ctx.target_path(resource);
    let created = !target_path.exists();
    let mut target = load_tree_or_empty(&target_path)?;

    let report = merge_tree(&reference, &mut target, table);

    let written = report.has_changes() && !dry_run;
    if written {
        save_tree(&target_path, &target)?;
        info!(
            path = %target_path.display(),
            added = report.added_count(),
            updated = report.updated_count(),
            "patched target file"
        );
    }

    let file_path = target_path.display().to_string();
    let issues = report
        .conflicts
        .iter()
        .map(|conflict| {
            Issue::TypeConflict(TypeConflictIssue {
                resource: resource.to_string(),
                file_path: file_path.clone(),
                key: conflict.key.clone(),
                reference_is_object: conflict.reference_is_object,
            })
        })
        .collect();

    Ok(MergeOutcome {
        resource: resource.to_string(),
        target_path,
        created,
        written,
        dry_run,
        report,
        issues,
    })
}
