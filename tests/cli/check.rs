use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_check_reports_missing_keys_and_fails() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", r#"{"a": {"b": 1, "c": 2}}"#)?;
    test.write_file("locales/zh_CN.json", r#"{"a": {"b": 1}}"#)?;
    test.write_file("locales/ja_JP.json", r#"{"a": {"b": 1, "c": 2}}"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Base locale (en_US) has 2 keys.

    Checking ja_JP.json...
      ✓ No missing keys.

    Checking zh_CN.json...
      ✘ 1 key missing in zh_CN.json:
        - a.c

    ✘ 1 locale file out of date with en_US.json.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_superset_succeeds() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", r#"{"a": "x"}"#)?;
    test.write_file("locales/ru_RU.json", r#"{"a": "икс", "extra": "y"}"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Base locale (en_US) has 1 key.

    Checking ru_RU.json...
      ✓ No missing keys.

    ✓ All locales are up to date with en_US.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_descends_into_arrays_by_default() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", r#"{"steps": ["one", "two"]}"#)?;
    test.write_file("locales/zh_CN.json", r#"{"steps": ["一"]}"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Base locale (en_US) has 2 keys.

    Checking zh_CN.json...
      ✘ 1 key missing in zh_CN.json:
        - steps.1

    ✘ 1 locale file out of date with en_US.json.

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.check_command().args(["--arrays", "skip"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Base locale (en_US) has 0 keys.

    Checking zh_CN.json...
      ✓ No missing keys.

    ✓ All locales are up to date with en_US.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_verbose_lists_loaded_files() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", r#"{"a": "x"}"#)?;
    test.write_file("locales/ja_JP.json", r#"{"a": "x"}"#)?;
    test.write_file("locales/zh_CN.json", r#"{"a": "x"}"#)?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.check_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    loaded [ROOT]/locales/en_US.json
    loaded [ROOT]/locales/ja_JP.json
    loaded [ROOT]/locales/zh_CN.json
    Base locale (en_US) has 1 key.

    Checking ja_JP.json...
      ✓ No missing keys.

    Checking zh_CN.json...
      ✓ No missing keys.

    ✓ All locales are up to date with en_US.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_missing_locales_dir_aborts() -> Result<()> {
    let test = CliTest::with_config()?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Locales directory '[ROOT]/locales' does not exist.
    Hint: Check your .i18nkeysrc.json 'localesDir' setting.
    ");

    Ok(())
}

#[test]
fn test_check_missing_base_file_aborts() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/zh_CN.json", r#"{"a": "x"}"#)?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Base locale file 'en_US.json' not found in '[ROOT]/locales'.
    Hint: Check your .i18nkeysrc.json 'baseLocale' setting.
    ");

    Ok(())
}

#[test]
fn test_check_malformed_locale_aborts_whole_run() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", r#"{"a": "x"}"#)?;
    test.write_file("locales/de_DE.json", r#"{"b": "y"}"#)?;
    test.write_file("locales/zh_CN.json", "{ broken")?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse JSON file: [ROOT]/locales/zh_CN.json: [parse error]
    ");

    Ok(())
}

#[test]
fn test_check_command_line_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/de_DE.json", r#"{"a": "x", "b": "y"}"#)?;
    test.write_file("i18n/fr_FR.json", r#"{"a": "x"}"#)?;

    assert_cmd_snapshot!(
        test.check_command()
            .args(["--locales-dir", "i18n", "--base-locale", "de_DE"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Base locale (de_DE) has 2 keys.

    Checking fr_FR.json...
      ✘ 1 key missing in fr_FR.json:
        - b

    ✘ 1 locale file out of date with de_DE.json.

    ----- stderr -----
    "
    );

    Ok(())
}
