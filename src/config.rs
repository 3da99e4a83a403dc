use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

/// File extension of every locale resource.
pub const RESOURCE_EXTENSION: &str = "json";

pub const DEFAULT_RESOURCES: &[&str] = &[
    "br",
    "drivers",
    "global",
    "home",
    "index",
    "indexes",
    "login",
    "manage",
    "metas",
    "settings",
    "settings_other",
    "shares",
    "storages",
    "tasks",
    "users",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one sub-directory per locale.
    #[serde(default = "default_langs_root", alias = "langsDir")]
    pub langs_root: String,
    /// Locale treated as the superset of required keys.
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    /// Locale brought into parity with the reference.
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
    /// Resource names compared by `diff`, without the `.json` suffix.
    #[serde(default = "default_resources")]
    pub resources: Vec<String>,
    /// Resource whose missing keys `diff` also writes to `diff_report`.
    #[serde(default = "default_settings_resource")]
    pub report_resource: String,
    #[serde(default = "default_diff_report")]
    pub diff_report: String,
    #[serde(default = "default_settings_resource")]
    pub extract_resource: String,
    #[serde(default = "default_extract_report")]
    pub extract_report: String,
    #[serde(default = "default_settings_resource")]
    pub merge_resource: String,
    /// Optional translation table (flat JSON object) used by `merge`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<String>,
}

fn default_langs_root() -> String {
    "./src/lang".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_target_locale() -> String {
    "zh-CN".to_string()
}

fn default_resources() -> Vec<String> {
    DEFAULT_RESOURCES.iter().map(|s| s.to_string()).collect()
}

fn default_settings_resource() -> String {
    "settings".to_string()
}

fn default_diff_report() -> String {
    "missing_keys_full.txt".to_string()
}

fn default_extract_report() -> String {
    "missing_settings.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            langs_root: default_langs_root(),
            reference_locale: default_reference_locale(),
            target_locale: default_target_locale(),
            resources: default_resources(),
            report_resource: default_settings_resource(),
            diff_report: default_diff_report(),
            extract_resource: default_settings_resource(),
            extract_report: default_extract_report(),
            merge_resource: default_settings_resource(),
            translations: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects an empty or duplicated resource manifest, resource names that
    /// carry the file extension, and identical reference/target locales.
    pub fn validate(&self) -> Result<()> {
        if self.reference_locale == self.target_locale {
            bail!(
                "'referenceLocale' and 'targetLocale' must differ (both are \"{}\")",
                self.reference_locale
            );
        }

        if self.resources.is_empty() {
            bail!("'resources' must list at least one resource");
        }

        let mut seen = HashSet::new();
        let single = [
            &self.report_resource,
            &self.extract_resource,
            &self.merge_resource,
        ];
        for name in &self.resources {
            validate_resource_name(name, "resources")?;
            if !seen.insert(name.as_str()) {
                bail!("Duplicate resource in 'resources': \"{}\"", name);
            }
        }
        for name in single {
            validate_resource_name(name, "resource")?;
        }

        Ok(())
    }

    pub fn reference_dir(&self) -> PathBuf {
        Path::new(&self.langs_root).join(&self.reference_locale)
    }

    pub fn target_dir(&self) -> PathBuf {
        Path::new(&self.langs_root).join(&self.target_locale)
    }
}

/// Reject empty resource names and names carrying the `.json` suffix.
///
/// `field` names the config key or CLI flag the name came from.
pub fn validate_resource_name(name: &str, field: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Empty resource name in '{}'", field);
    }
    let suffix = format!(".{}", RESOURCE_EXTENSION);
    if name.ends_with(&suffix) {
        bail!(
            "Resource \"{}\" in '{}' should not include the \"{}\" suffix",
            name,
            field,
            suffix
        );
    }
    Ok(())
}

/// File name of a resource, e.g. `settings` -> `settings.json`.
pub fn resource_file_name(name: &str) -> String {
    format!("{}.{}", name, RESOURCE_EXTENSION)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
