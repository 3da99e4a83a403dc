use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::validate_resource_name, core::SyncContext, rules::extract::extract_resource,
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;

    if let Some(name) = &cmd.resource {
        validate_resource_name(name, "--resource")?;
    }
    let resource = cmd
        .resource
        .unwrap_or_else(|| ctx.config.extract_resource.clone());
    let report_path = match cmd.output {
        Some(path) => path,
        None => ctx.resolve(&ctx.config.extract_report),
    };

    let outcome = extract_resource(&ctx, &resource, &report_path)?;

    Ok(CommandResult::new(CommandSummary::Extract(outcome), Vec::new())
        .with_config_file(ctx.config_file))
}
