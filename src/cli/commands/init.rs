use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(config_path, format!("{}\n", default_config_json()?))?;
        None
    };

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary {
            config_path: config_path.to_path_buf(),
            error,
        }),
        Vec::new(),
    ))
}
