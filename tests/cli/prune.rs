use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const EN_US: &str = r#"{
  "app": {"lang": "Language", "title": "Launcher"},
  "common": {"deleting": "Deleting...", "ok": "OK"},
  "settings": {"layout": {"title": "Layout", "desc": "Layout settings"}},
  "steps": [{"title": "Install"}]
}"#;

#[test]
fn test_prune_rewrites_files_in_place() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;
    test.write_file(
        "locales/zh_CN.json",
        r#"{"settings": {"layout": {"title": "布局"}}, "app": {"title": "启动器"}}"#,
    )?;
    test.write_file(
        "i18n-unused-keys.txt",
        "# produced by `i18n-keys unused`\napp.lang\ncommon.deleting\nsettings.layout\nsteps.0.title\n",
    )?;

    // ja_JP.json is in the locale list but absent: skipped silently
    assert_cmd_snapshot!(test.prune_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed en_US.json: reduced size from 188 to 79 characters.
    Processed zh_CN.json: reduced size from 60 to 23 characters.
    ✓ Pruned 4 keys from 2 locale files.

    ----- stderr -----
    ");

    assert_snapshot!(test.read_file("locales/en_US.json")?.trim_end(), @r#"
    {
      "app": {
        "title": "Launcher"
      },
      "common": {
        "ok": "OK"
      },
      "steps": [
        {
          "title": "Install"
        }
      ]
    }
    "#);
    assert_snapshot!(test.read_file("locales/zh_CN.json")?.trim_end(), @r#"
    {
      "app": {
        "title": "启动器"
      }
    }
    "#);
    Ok(())
}

#[test]
fn test_prune_verbose_lists_loaded_and_skipped_files() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.prune_command().args(["-v", "--key", "app.lang"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    loaded [ROOT]/locales/en_US.json
    Processed en_US.json: reduced size from 188 to 170 characters.
    ✓ Pruned 1 key from 1 locale file.

    ----- stderr -----
    note: [ROOT]/locales/zh_CN.json not found, skipped
    note: [ROOT]/locales/ja_JP.json not found, skipped
    ");

    Ok(())
}

#[test]
fn test_prune_second_run_is_noop() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;

    test.prune_command()
        .args(["--key", "app.lang", "--key", "common.deleting"])
        .output()?;
    let after_first = test.read_file("locales/en_US.json")?;

    assert_cmd_snapshot!(
        test.prune_command()
            .args(["--key", "app.lang", "--key", "common.deleting"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed en_US.json: reduced size from 145 to 145 characters.
    ✓ Pruned 2 keys from 1 locale file.

    ----- stderr -----
    "
    );
    assert_eq!(test.read_file("locales/en_US.json")?, after_first);

    Ok(())
}

#[test]
fn test_prune_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;

    assert_cmd_snapshot!(test.prune_command().args(["--key", "app.lang", "--dry-run"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Would process en_US.json: reduced size from 188 to 170 characters.
    dry run: Would prune 1 key from 1 locale file. Run without --dry-run to write changes.

    ----- stderr -----
    ");
    assert_eq!(test.read_file("locales/en_US.json")?, EN_US);

    Ok(())
}

#[test]
fn test_prune_malformed_file_aborts_before_writing() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;
    test.write_file("locales/ja_JP.json", "{ broken")?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.prune_command().args(["--key", "app.lang"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse JSON file: [ROOT]/locales/ja_JP.json: [parse error]
    ");
    assert_eq!(test.read_file("locales/en_US.json")?, EN_US);

    Ok(())
}

#[test]
fn test_prune_missing_locales_dir_aborts() -> Result<()> {
    let test = CliTest::with_config()?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.prune_command().args(["--key", "a.b"]), @r"
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
fn test_prune_without_key_list_fails() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;
    let _filters = test.snapshot_filters();

    assert_cmd_snapshot!(test.prune_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Key list file '[ROOT]/i18n-unused-keys.txt' not found.
    Hint: Pass --keys-file or --key, or set 'unusedKeysFile' in .i18nkeysrc.json.
    ");

    test.write_file("i18n-unused-keys.txt", "# nothing yet\n")?;
    assert_cmd_snapshot!(test.prune_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No keys to prune.
    Hint: List keys in the key list file or pass them with --key.
    ");
    assert_eq!(test.read_file("locales/en_US.json")?, EN_US);

    Ok(())
}

#[test]
fn test_prune_json_key_list_and_locale_override() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("locales/en_US.json", EN_US)?;
    test.write_file("locales/zh_CN.json", r#"{"app": {"lang": "语言", "title": "启动器"}}"#)?;
    test.write_file("keys.json", r#"["app.lang"]"#)?;

    assert_cmd_snapshot!(
        test.prune_command()
            .args(["--keys-file", "keys.json", "--locale", "zh_CN.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed zh_CN.json: reduced size from 35 to 23 characters.
    ✓ Pruned 1 key from 1 locale file.

    ----- stderr -----
    "
    );
    assert_eq!(test.read_file("locales/en_US.json")?, EN_US);
    assert!(!test.read_file("locales/zh_CN.json")?.contains("lang"));

    Ok(())
}
