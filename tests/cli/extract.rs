use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_extract_writes_top_level_keys() -> Result<()> {
    let test = CliTest::with_resources(&["settings"])?;
    test.write_locale(
        "en",
        "settings",
        r#"{"sso_auto_register": "SSO auto register", "ocr_api": "OCR api", "storage": {"s3": "S3"}}"#,
    )?;
    test.write_locale("zh-CN", "settings", r#"{"storage": {}}"#)?;

    assert_cmd_snapshot!(test.extract_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Wrote 2 top-level keys missing from "settings" to missing_settings.txt

    ----- stderr -----
    "#);
    assert_eq!(
        test.read_file("missing_settings.txt")?,
        "sso_auto_register ||| SSO auto register\nocr_api ||| OCR api\n"
    );

    Ok(())
}

#[test]
fn test_extract_output_and_resource_flags() -> Result<()> {
    let test = CliTest::with_resources(&["home", "settings"])?;
    test.write_locale("en", "home", r#"{"title": "Home", "nav": {"a": "A"}}"#)?;
    test.write_locale("zh-CN", "home", r#"{"title": "主页"}"#)?;

    let mut cmd = test.extract_command();
    cmd.args(["--resource", "home", "-o", "home_missing.txt"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Wrote 1 top-level key missing from "home" to home_missing.txt

    ----- stderr -----
    "#);
    assert_eq!(test.read_file("home_missing.txt")?, "nav ||| {\"a\":\"A\"}\n");

    Ok(())
}

#[test]
fn test_extract_missing_target_is_fatal() -> Result<()> {
    let test = CliTest::with_resources(&["settings"])?;
    test.write_locale("en", "settings", r#"{"title": "Title"}"#)?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read JSON file: lang/zh-CN/settings.json: No such file or directory (os error 2)
    ");
    assert!(!test.root().join("missing_settings.txt").exists());

    Ok(())
}

#[test]
fn test_extract_rejects_resource_with_suffix() -> Result<()> {
    let test = CliTest::with_resources(&["settings"])?;

    let mut cmd = test.extract_command();
    cmd.args(["--resource", "settings.json"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Resource "settings.json" in '--resource' should not include the ".json" suffix
    "#);

    Ok(())
}
