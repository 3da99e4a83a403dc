use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["langsRoot"], "./src/lang");
    assert_eq!(parsed["referenceLocale"], "en");
    assert_eq!(parsed["targetLocale"], "zh-CN");
    assert_eq!(parsed["resources"].as_array().map(Vec::len), Some(15));
    assert!(
        parsed.get("translations").is_none(),
        "Unset translations should be omitted"
    );
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .locsyncrc.json

    ----- stderr -----
    ");
    assert_config_content(&test.read_file(".locsyncrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locsyncrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: .locsyncrc.json already exists

    ----- stderr -----
    ");
    assert_eq!(test.read_file(".locsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Usage: locsync"));

    Ok(())
}
