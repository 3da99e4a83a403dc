//! Shallow missing-key extraction for a single resource.
//!
//! Only top-level keys are compared. A top-level key that exists in both
//! trees is never reported, even when its nested content differs; use the
//! recursive diff for that.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::core::{
    Node, SyncContext,
    key_report::{ReportEntry, write_key_report},
    keys::missing_top_level,
    parsers::json::load_tree,
};

/// Outcome of an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub resource: String,
    pub report_path: PathBuf,
    /// Entries in reference order.
    pub entries: Vec<ReportEntry>,
}

/// Missing top-level keys paired with their raw reference values.
pub fn extract_missing(reference: &Node, target: &Node) -> Vec<ReportEntry> {
    missing_top_level(reference, target)
        .into_iter()
        .map(|(key, value)| ReportEntry::new(key, value.to_string()))
        .collect()
}

/// Load `resource` from both locales and write its missing top-level keys.
///
/// The report is always overwritten; an empty file means top-level parity.
/// Read and parse failures are returned to the caller.
pub fn extract_resource(
    ctx: &SyncContext,
    resource: &str,
    report_path: &Path,
) -> Result<ExtractOutcome> {
    let reference = load_tree(&ctx.reference_path(resource))?;
    let target = load_tree(&ctx.target_path(resource))?;

    let entries = extract_missing(&reference, &target);
    write_key_report(report_path, &entries)?;
    debug!(resource, entries = entries.len(), path = %report_path.display(), "wrote extract report");

    Ok(ExtractOutcome {
        resource: resource.to_string(),
        report_path: report_path.to_path_buf(),
        entries,
    })
}
