//! Recursive key-set comparison across the resource manifest.
//!
//! Every resource is compared independently: a missing or unreadable file
//! becomes an issue for that resource and the loop moves on.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use tracing::debug;

use crate::{
    core::{
        Node, SyncContext, VALUE_NOT_FOUND,
        key_report::{ReportEntry, write_key_report},
        keys::missing_keys,
        parsers::json::load_tree,
    },
    issues::{
        Issue, MissingFileIssue, MissingKeysIssue, ParseErrorIssue, Side, WriteErrorIssue,
    },
};

/// Result of comparing one resource.
#[derive(Debug)]
pub enum ResourceOutcome {
    /// Both files loaded; `missing` may be empty.
    Compared {
        resource: String,
        target_path: PathBuf,
        reference: Node,
        missing: BTreeSet<String>,
    },
    /// The resource could not be compared.
    Skipped(Issue),
}

/// A key report written as a side effect of the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub resource: String,
    pub path: PathBuf,
    pub entries: Vec<ReportEntry>,
}

/// Outcome of a whole diff run.
#[derive(Debug, Default)]
pub struct DiffRun {
    pub issues: Vec<Issue>,
    pub resources_checked: usize,
    /// Number of missing keys across all resources.
    pub missing_count: usize,
    pub report: Option<WrittenReport>,
}

/// Compare one resource.
pub fn diff_resource(ctx: &SyncContext, resource: &str) -> ResourceOutcome {
    let reference_path = ctx.reference_path(resource);
    let target_path = ctx.target_path(resource);

    for (path, side) in [(&target_path, Side::Target), (&reference_path, Side::Reference)] {
        if !path.exists() {
            debug!(resource, path = %path.display(), %side, "resource file missing");
            return ResourceOutcome::Skipped(Issue::MissingFile(MissingFileIssue {
                resource: resource.to_string(),
                file_path: path.display().to_string(),
                side,
            }));
        }
    }

    let reference = match load_tree(&reference_path) {
        Ok(tree) => tree,
        Err(e) => return skipped_parse_error(resource, &reference_path, e),
    };
    let target = match load_tree(&target_path) {
        Ok(tree) => tree,
        Err(e) => return skipped_parse_error(resource, &target_path, e),
    };

    let missing = missing_keys(&reference, &target);
    debug!(resource, missing = missing.len(), "compared resource");

    ResourceOutcome::Compared {
        resource: resource.to_string(),
        target_path,
        reference,
        missing,
    }
}

fn skipped_parse_error(resource: &str, path: &Path, error: anyhow::Error) -> ResourceOutcome {
    debug!(resource, path = %path.display(), "failed to load resource: {:#}", error);
    ResourceOutcome::Skipped(Issue::ParseError(ParseErrorIssue {
        resource: resource.to_string(),
        file_path: path.display().to_string(),
        error: root_cause_message(&error),
    }))
}

/// Innermost error message; the outer context already names the file.
fn root_cause_message(error: &anyhow::Error) -> String {
    error.root_cause().to_string()
}

/// Pair each missing key with its reference value.
///
/// Keys whose dotted path cannot be walked (e.g. a key containing `.`) get
/// the [`VALUE_NOT_FOUND`] marker.
pub fn resolve_report_entries(reference: &Node, missing: &BTreeSet<String>) -> Vec<ReportEntry> {
    missing
        .iter()
        .map(|key| {
            let value = match reference.resolve(key) {
                Ok(node) => node.to_string(),
                Err(e) => {
                    debug!(key = key.as_str(), "{}", e);
                    VALUE_NOT_FOUND.to_string()
                }
            };
            ReportEntry::new(key, value)
        })
        .collect()
}

/// Compare every resource in `resources`, in order.
///
/// For `ctx.config.report_resource`, a non-empty missing set is also written
/// to `report_path` as `key ||| value` lines sorted by key.
pub fn diff_resources(ctx: &SyncContext, resources: &[String], report_path: &Path) -> DiffRun {
    let mut run = DiffRun::default();

    for resource in resources {
        run.resources_checked += 1;

        let (resource, target_path, reference, missing) = match diff_resource(ctx, resource) {
            ResourceOutcome::Compared {
                resource,
                target_path,
                reference,
                missing,
            } => (resource, target_path, reference, missing),
            ResourceOutcome::Skipped(issue) => {
                run.issues.push(issue);
                continue;
            }
        };

        if missing.is_empty() {
            continue;
        }

        if resource == ctx.config.report_resource {
            let entries = resolve_report_entries(&reference, &missing);
            match write_report(report_path, &entries) {
                Ok(()) => {
                    run.report = Some(WrittenReport {
                        resource: resource.clone(),
                        path: report_path.to_path_buf(),
                        entries,
                    });
                }
                Err(e) => run.issues.push(Issue::WriteError(WriteErrorIssue {
                    resource: resource.clone(),
                    file_path: report_path.display().to_string(),
                    error: root_cause_message(&e),
                })),
            }
        }

        run.missing_count += missing.len();
        run.issues.push(Issue::MissingKeys(MissingKeysIssue {
            resource,
            file_path: target_path.display().to_string(),
            keys: missing.into_iter().collect(),
        }));
    }

    run
}

fn write_report(path: &Path, entries: &[ReportEntry]) -> Result<()> {
    write_key_report(path, entries)?;
    debug!(path = %path.display(), entries = entries.len(), "wrote diff report");
    Ok(())
}
