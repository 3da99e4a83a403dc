use anyhow::Result;
use tracing::debug;

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::validate_resource_name,
    core::{SyncContext, TranslationTable},
    rules::merge::merge_resource,
};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;

    if let Some(name) = &cmd.resource {
        validate_resource_name(name, "--resource")?;
    }
    let resource = cmd
        .resource
        .unwrap_or_else(|| ctx.config.merge_resource.clone());
    let translations = cmd
        .translations
        .or_else(|| ctx.config.translations.as_ref().map(|p| ctx.resolve(p)));
    let table = match translations {
        Some(path) => TranslationTable::load(&path)?,
        None => TranslationTable::default(),
    };
    debug!(entries = table.len(), "loaded translation table");

    let mut outcome = merge_resource(&ctx, &resource, &table, cmd.dry_run)?;
    let issues = std::mem::take(&mut outcome.issues);

    Ok(CommandResult::new(CommandSummary::Merge(outcome), issues)
        .with_config_file(ctx.config_file))
}
