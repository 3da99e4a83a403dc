use std::path::PathBuf;

use crate::issues::{Issue, Report, Severity};
use crate::rules::{diff::WrittenReport, extract::ExtractOutcome, merge::MergeOutcome};

#[derive(Debug)]
pub enum CommandSummary {
    Diff(DiffSummary),
    Extract(ExtractOutcome),
    Merge(MergeOutcome),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DiffSummary {
    pub resources_checked: usize,
    pub missing_count: usize,
    pub report: Option<WrittenReport>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
    /// Set when the file could not be created.
    pub error: Option<String>,
}

/// Result of running a locsync command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues in the order they were found.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Config file in use, for verbose output.
    pub config_file: Option<PathBuf>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, issues: Vec<Issue>) -> Self {
        let mut error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        if let CommandSummary::Init(ref summary) = summary
            && summary.error.is_some()
        {
            error_count += 1;
        }

        Self {
            summary,
            issues,
            error_count,
            warning_count,
            config_file: None,
        }
    }

    pub fn with_config_file(mut self, config_file: Option<PathBuf>) -> Self {
        self.config_file = config_file;
        self
    }
}
