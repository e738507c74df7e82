use anyhow::Result;

use crate::CliTest;

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("collect"), "stdout: {stdout}");
    assert!(stdout.contains("check"), "stdout: {stdout}");
    assert!(stdout.contains("init"), "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_unknown_command_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("frobnicate").output()?;
    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_unknown_engine_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .collect_command()
        .args(["--engine", "netscape"])
        .output()?;
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("netscape"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn test_duplicate_engines_are_rejected_before_launch() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .collect_command()
        .args(["--engine", "chromium", "--engine", "chromium"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("duplicate engine 'chromium'"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn test_zero_launch_timeout_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .collect_command()
        .args(["--launch-timeout", "0"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("launchTimeoutSecs"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn test_invalid_config_file_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".globalistrc.json", "{ not json")?;

    let output = test.collect_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Failed to parse"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn test_missing_driver_binary_fails_launch() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".globalistrc.json",
        r#"{
  "engines": ["chromium"],
  "driverPaths": { "chromium": "/nonexistent/chromedriver" }
}"#,
    )?;

    let output = test.collect_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("failed to launch chromium"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // Nothing may be written on failure.
    assert!(!test.root().join("src/globals.ts").exists());

    Ok(())
}
