use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn setup() -> Result<CliTest> {
    let test = CliTest::with_resources(&["br", "home", "settings"])?;
    test.write_locale("en", "br", r#"{"a": "A"}"#)?;
    test.write_locale(
        "en",
        "home",
        r#"{"title": "Home", "nav": {"a": "A", "b": "B"}}"#,
    )?;
    test.write_locale("zh-CN", "home", r#"{"title": "主页", "nav": {"a": "甲"}}"#)?;
    test.write_locale(
        "en",
        "settings",
        r#"{"site_title": "Site title", "storage": {"s3": "S3"}}"#,
    )?;
    test.write_locale("zh-CN", "settings", r#"{"storage": {}}"#)?;
    Ok(test)
}

#[test]
fn test_diff_reports_missing_keys_and_files() -> Result<()> {
    let test = setup()?;

    assert_cmd_snapshot!(test.diff_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: target file for "br" does not exist  missing-file
      --> lang/zh-CN/br.json
      = help: run `locsync merge --resource br` to create it

    error: "home" is missing 1 key  missing-keys
      --> lang/zh-CN/home.json
        - nav.b

    error: "settings" is missing 2 keys  missing-keys
      --> lang/zh-CN/settings.json
        - site_title
        - storage.s3

    note: wrote 2 entries for "settings" to missing_keys_full.txt
    ✘ Found 3 problems in 3 resources (3 missing keys)

    ----- stderr -----
    "#);

    assert_eq!(
        test.read_file("missing_keys_full.txt")?,
        "site_title ||| Site title\nstorage.s3 ||| S3\n"
    );

    Ok(())
}

#[test]
fn test_diff_parity() -> Result<()> {
    let test = CliTest::with_resources(&["home"])?;
    test.write_locale("en", "home", r#"{"nav": {"a": "A"}}"#)?;
    test.write_locale("zh-CN", "home", r#"{"nav": {"a": "甲"}, "extra": "多余"}"#)?;

    assert_cmd_snapshot!(test.diff_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Compared 1 resource - no missing keys

    ----- stderr -----
    ");
    assert!(!test.root().join("missing_keys_full.txt").exists());

    Ok(())
}

#[test]
fn test_diff_parse_error_continues() -> Result<()> {
    let test = CliTest::with_resources(&["login", "users"])?;
    test.write_locale("en", "login", r#"{"a": "A"}"#)?;
    test.write_locale("zh-CN", "login", r#"{"a": "#)?;
    test.write_locale("en", "users", r#"{"a": "A", "b": "B"}"#)?;
    test.write_locale("zh-CN", "users", r#"{"a": "甲"}"#)?;

    insta::with_settings!({filters => vec![
        (r"EOF while parsing [a-z ]+ at line \d+ column \d+", "[JSON ERROR]"),
    ]}, {
        assert_cmd_snapshot!(test.diff_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: could not load "login": [JSON ERROR]  parse-error
          --> lang/zh-CN/login.json

        error: "users" is missing 1 key  missing-keys
          --> lang/zh-CN/users.json
            - b

        ✘ Found 2 problems in 2 resources (1 missing key)

        ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_diff_resource_flag_overrides_manifest() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.diff_command();
    cmd.args(["--resource", "home"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "home" is missing 1 key  missing-keys
      --> lang/zh-CN/home.json
        - nav.b

    ✘ Found 1 problem in 1 resource (1 missing key)

    ----- stderr -----
    "#);
    assert!(!test.root().join("missing_keys_full.txt").exists());

    Ok(())
}

#[test]
fn test_diff_rejects_resource_with_suffix() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.diff_command();
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

#[test]
fn test_diff_custom_report_path() -> Result<()> {
    let test = CliTest::with_resources(&["settings"])?;
    test.write_locale("en", "settings", r#"{"site_title": "Site title"}"#)?;
    test.write_locale("zh-CN", "settings", r#"{}"#)?;

    let mut cmd = test.diff_command();
    cmd.args(["--report", "out/settings_missing.txt"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "settings" is missing 1 key  missing-keys
      --> lang/zh-CN/settings.json
        - site_title

    note: wrote 1 entry for "settings" to out/settings_missing.txt
    ✘ Found 1 problem in 1 resource (1 missing key)

    ----- stderr -----
    "#);
    assert_eq!(
        test.read_file("out/settings_missing.txt")?,
        "site_title ||| Site title\n"
    );

    Ok(())
}

#[test]
fn test_diff_locale_override() -> Result<()> {
    let test = CliTest::with_resources(&["home"])?;
    test.write_locale("en", "home", r#"{"a": "A"}"#)?;
    test.write_locale("ja", "home", r#"{"a": "エー"}"#)?;

    let mut cmd = test.diff_command();
    cmd.args(["--target-locale", "ja"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Compared 1 resource - no missing keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_diff_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locsyncrc.json", r#"{ "resources": [] }"#)?;

    assert_cmd_snapshot!(test.diff_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'resources' must list at least one resource
    ");

    Ok(())
}
