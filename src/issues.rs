//! Issue types produced while comparing and merging locale trees.
//!
//! Each issue is self-contained with everything the reporter needs to print
//! it: the resource it belongs to, the file involved and the details.

use std::fmt;

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingFile,
    ParseError,
    MissingKeys,
    TypeConflict,
    WriteError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingFile => write!(f, "missing-file"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::MissingKeys => write!(f, "missing-keys"),
            Rule::TypeConflict => write!(f, "type-conflict"),
            Rule::WriteError => write!(f, "write-error"),
        }
    }
}

/// Which locale side of a resource an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reference,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Reference => write!(f, "reference"),
            Side::Target => write!(f, "target"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A resource file listed in the manifest does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFileIssue {
    pub resource: String,
    pub file_path: String,
    pub side: Side,
}

/// A resource file could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub resource: String,
    pub file_path: String,
    pub error: String,
}

/// Keys present in the reference tree but absent from the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeysIssue {
    pub resource: String,
    /// Target file the keys are missing from.
    pub file_path: String,
    /// Dotted key paths, sorted.
    pub keys: Vec<String>,
}

/// Reference and target disagree on whether a key holds a nested object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConflictIssue {
    pub resource: String,
    pub file_path: String,
    /// Dotted key path of the conflicting node.
    pub key: String,
    /// True when the reference holds an object and the target a plain value.
    pub reference_is_object: bool,
}

/// An output file could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteErrorIssue {
    pub resource: String,
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while syncing a resource.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingFile(MissingFileIssue),
    ParseError(ParseErrorIssue),
    MissingKeys(MissingKeysIssue),
    TypeConflict(TypeConflictIssue),
    WriteError(WriteErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// File the issue points at.
    fn file_path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn severity(&self) -> Severity;

    fn rule(&self) -> Rule;

    /// Extra lines listed under the location (e.g. missing keys).
    fn details(&self) -> &[String] {
        &[]
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingFileIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("{} file for \"{}\" does not exist", self.side, self.resource)
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::MissingFile
    }

    fn hint(&self) -> Option<String> {
        match self.side {
            Side::Target => Some(format!(
                "run `locsync merge --resource {}` to create it",
                self.resource
            )),
            Side::Reference => None,
        }
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("could not load \"{}\": {}", self.resource, self.error)
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::ParseError
    }
}

impl Report for MissingKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!(
            "\"{}\" is missing {} {}",
            self.resource,
            self.keys.len(),
            if self.keys.len() == 1 { "key" } else { "keys" }
        )
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::MissingKeys
    }

    fn details(&self) -> &[String] {
        &self.keys
    }
}

impl Report for TypeConflictIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        if self.reference_is_object {
            format!(
                "\"{}\" is an object in the reference but a value in the target",
                self.key
            )
        } else {
            format!(
                "\"{}\" is a value in the reference but an object in the target",
                self.key
            )
        }
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::TypeConflict
    }

    fn hint(&self) -> Option<String> {
        Some("left untouched; fix the target file by hand".to_string())
    }
}

impl Report for WriteErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("could not write output for \"{}\": {}", self.resource, self.error)
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::WriteError
    }
}
