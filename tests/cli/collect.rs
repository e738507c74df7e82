//! Real-engine tests. These launch actual WebDriver binaries and are
//! ignored by default; run them with `cargo test -- --ignored` on a
//! machine with chromedriver installed.

use anyhow::Result;

use crate::CliTest;

fn chromium_only_config() -> &'static str {
    r#"{
  "engines": ["chromium"],
  "output": "globals.ts"
}"#
}

#[test]
#[ignore = "requires chromedriver on PATH"]
fn test_collect_writes_generated_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".globalistrc.json", chromium_only_config())?;

    let output = test.command_with_path().arg("collect").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Collected"), "stdout: {stdout}");
    assert!(stdout.contains("Wrote globals.ts"), "stdout: {stdout}");

    let content = test.read_file("globals.ts")?;
    assert!(content.contains("'window',"));
    assert!(content.contains("export type BrowserGlobalKey"));

    Ok(())
}

#[test]
#[ignore = "requires chromedriver on PATH"]
fn test_check_passes_right_after_collect() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".globalistrc.json", chromium_only_config())?;

    let collect = test.command_with_path().arg("collect").output()?;
    assert!(collect.status.success());

    let check = test.command_with_path().arg("check").output()?;
    assert!(
        check.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&check.stderr)
    );
    assert!(String::from_utf8_lossy(&check.stdout).contains("up to date"));

    Ok(())
}

#[test]
#[ignore = "requires chromedriver on PATH"]
fn test_check_fails_when_file_is_stale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".globalistrc.json", chromium_only_config())?;
    test.write_file("globals.ts", "// stale content\n")?;

    let check = test.command_with_path().arg("check").output()?;
    assert_eq!(check.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&check.stdout).contains("out of date"));

    Ok(())
}

#[test]
#[ignore = "requires chromedriver on PATH"]
fn test_dry_run_prints_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".globalistrc.json", chromium_only_config())?;

    let output = test
        .command_with_path()
        .args(["collect", "--dry-run"])
        .output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("export const globals = ["));
    assert!(!test.root().join("globals.ts").exists());

    Ok(())
}
