use anyhow::Result;

use super::super::args::DiffCommand;
use super::{CommandResult, CommandSummary, DiffSummary};
use crate::{config::validate_resource_name, core::SyncContext, rules::diff::diff_resources};

pub fn diff(cmd: DiffCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;

    for name in &cmd.resources {
        validate_resource_name(name, "--resource")?;
    }
    let resources = if cmd.resources.is_empty() {
        ctx.config.resources.clone()
    } else {
        cmd.resources
    };
    let report_path = match cmd.report {
        Some(path) => path,
        None => ctx.resolve(&ctx.config.diff_report),
    };

    let run = diff_resources(&ctx, &resources, &report_path);

    let summary = CommandSummary::Diff(DiffSummary {
        resources_checked: run.resources_checked,
        missing_count: run.missing_count,
        report: run.report,
    });
    Ok(CommandResult::new(summary, run.issues).with_config_file(ctx.config_file))
}
