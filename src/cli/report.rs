//! Report formatting and printing utilities.
//!
//! Separate from the sync logic so the rules can be used as a library.

use std::io::Write;

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, DiffSummary, InitSummary};
use crate::issues::{Issue, Report, Severity};
use crate::rules::{
    extract::ExtractOutcome,
    merge::{KeyAction, MergeOutcome},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: per-command details, issues, then a summary line.
pub fn print<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    if verbose && let Some(path) = &result.config_file {
        let _ = writeln!(writer, "{} {}", "Using config:".dimmed(), path.display());
    }

    if let CommandSummary::Merge(outcome) = &result.summary {
        print_merge_changes(outcome, writer);
    }

    report_to(&result.issues, writer);

    match &result.summary {
        CommandSummary::Diff(summary) => print_diff_summary(summary, result, writer),
        CommandSummary::Extract(outcome) => print_extract_summary(outcome, writer),
        CommandSummary::Merge(outcome) => print_merge_summary(outcome, writer),
        CommandSummary::Init(summary) => print_init_summary(summary, writer),
    }
}

/// Print issues in cargo-style format, in the order they were found.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, writer);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    for detail in issue.details() {
        let _ = writeln!(writer, "    {} {}", "-".blue(), detail);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "help:".bold(), hint);
    }

    let _ = writeln!(writer);
}

fn print_diff_summary<W: Write>(summary: &DiffSummary, result: &CommandResult, writer: &mut W) {
    if let Some(report) = &summary.report {
        let _ = writeln!(
            writer,
            "{} wrote {} for \"{}\" to {}",
            "note:".bold(),
            count_noun(report.entries.len(), "entry", "entries"),
            report.resource,
            report.path.display()
        );
    }

    let resources = count_noun(summary.resources_checked, "resource", "resources");
    if result.error_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Compared {} - no missing keys", resources).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Found {} in {} ({})",
                count_noun(result.error_count, "problem", "problems"),
                resources,
                count_noun(summary.missing_count, "missing key", "missing keys")
            )
            .red()
        );
    }
}

fn print_extract_summary<W: Write>(outcome: &ExtractOutcome, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} missing from \"{}\" to {}",
            count_noun(outcome.entries.len(), "top-level key", "top-level keys"),
            outcome.resource,
            outcome.report_path.display()
        )
        .green()
    );
}

fn print_merge_changes<W: Write>(outcome: &MergeOutcome, writer: &mut W) {
    for change in &outcome.report.changes {
        let label = format!("{:<7}", change.action.as_str());
        let label = match change.action {
            KeyAction::Added => label.green(),
            KeyAction::Updated => label.yellow(),
        };
        let source = if change.translated {
            " (translated)".dimmed().to_string()
        } else {
            String::new()
        };
        let _ = writeln!(writer, "  {} {}{}", label, change.key, source);
    }
    if outcome.report.has_changes() {
        let _ = writeln!(writer);
    }
}

fn print_merge_summary<W: Write>(outcome: &MergeOutcome, writer: &mut W) {
    let path = outcome.target_path.display();
    let report = &outcome.report;

    if !report.has_changes() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No missing keys in {} - file left unchanged", path).green()
        );
        return;
    }

    let counts = format!(
        "{} added, {} updated",
        report.added_count(),
        report.updated_count()
    );
    let keys = count_noun(report.changes.len(), "key", "keys");

    if outcome.dry_run {
        let _ = writeln!(
            writer,
            "{} would patch {} in {} ({})",
            "Dry run:".bold(),
            keys,
            path,
            counts
        );
    } else {
        let verb = if outcome.created { "Created" } else { "Patched" };
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} {} with {} ({})", verb, path, keys, counts).green()
        );
    }
}

fn print_init_summary<W: Write>(summary: &InitSummary, writer: &mut W) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.config_path.display()).green()
            );
        }
    }
}

fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
