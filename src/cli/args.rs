//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `diff`: Compare key sets of every resource in the manifest
//! - `extract`: Write missing top-level keys of one resource to a text report
//! - `merge`: Add missing keys to one target resource file
//! - `init`: Initialize locsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Diff(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory containing one sub-directory per locale (overrides config file)
    #[arg(long)]
    pub langs_root: Option<PathBuf>,

    /// Reference locale (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Target locale (overrides config file)
    #[arg(long)]
    pub target_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DiffCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Resources to compare (default: the configured manifest)
    /// Can be specified multiple times: --resource home --resource settings
    #[arg(long = "resource", value_name = "NAME")]
    pub resources: Vec<String>,

    /// Report file for the missing keys of the report resource
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Resource to extract from (overrides config file)
    #[arg(long, value_name = "NAME")]
    pub resource: Option<String>,

    /// Report file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Resource to merge (overrides config file)
    #[arg(long, value_name = "NAME")]
    pub resource: Option<String>,

    /// Translation table: a JSON object mapping key names to translations
    #[arg(long, env = "LOCSYNC_TRANSLATIONS")]
    pub translations: Option<PathBuf>,

    /// Report changes without writing the target file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys present in the reference locale but missing from the target locale
    Diff(DiffCommand),
    /// Write top-level keys missing from one target resource to a text report
    Extract(ExtractCommand),
    /// Add missing keys to a target resource, preferring known translations
    Merge(MergeCommand),
    /// Initialize a new .locsyncrc.json configuration file
    Init,
}
