use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config, resource_file_name},
};

/// Resolved settings shared by every command.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--target-locale ja`)
/// 2. `.locsyncrc.json` config file
/// 3. Built-in defaults
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Base for relative paths: the config file's directory, or `.`.
    pub root_dir: PathBuf,
    /// Config file in use, if any.
    pub config_file: Option<PathBuf>,
    pub verbose: bool,
}

impl SyncContext {
    /// Load configuration from the current directory and apply CLI overrides.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let mut ctx = Self::from_dir(&cwd, common)?;
        if ctx.root_dir == cwd {
            ctx.root_dir = PathBuf::from(".");
        }
        Ok(ctx)
    }

    /// Load configuration found from `start_dir` upwards.
    ///
    /// Relative paths resolve against the directory holding the config file,
    /// or `start_dir` when no config file exists.
    pub fn from_dir(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        let root_dir = loaded
            .source
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(start_dir)
            .to_path_buf();
        let mut config = loaded.config;

        if let Some(langs_root) = &common.langs_root {
            config.langs_root = langs_root.to_string_lossy().to_string();
        }
        if let Some(locale) = &common.reference_locale {
            config.reference_locale = locale.clone();
        }
        if let Some(locale) = &common.target_locale {
            config.target_locale = locale.clone();
        }

        config.validate()?;

        Ok(Self::with_config(
            config,
            &root_dir,
            loaded.source,
            common.verbose,
        ))
    }

    /// Build a context from an already assembled config.
    pub fn with_config(
        config: Config,
        root_dir: &Path,
        config_file: Option<PathBuf>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            root_dir: root_dir.to_path_buf(),
            config_file,
            verbose,
        }
    }

    /// Resolve a configured path against the root directory.
    ///
    /// The result stays relative when the configured path is relative, so
    /// console output shows paths the way the user wrote them.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() || self.root_dir == Path::new(".") {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }

    pub fn reference_path(&self, resource: &str) -> PathBuf {
        self.resolve(self.config.reference_dir().join(resource_file_name(resource)))
    }

    pub fn target_path(&self, resource: &str) -> PathBuf {
        self.resolve(self.config.target_dir().join(resource_file_name(resource)))
    }
}
