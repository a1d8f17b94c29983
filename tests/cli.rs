use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

fn write_config(dir: &Path) -> Result<std::path::PathBuf> {
    let path = dir.join("networth.toml");
    std::fs::write(&path, "[rates]\nprovider = \"none\"\n").context("Failed to write config")?;
    Ok(path)
}

fn run_cli(config_path: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_networth"))
        .args(["--config", config_path.to_str().unwrap()])
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .context("Failed to execute networth CLI")
}

#[test]
fn compute_prints_the_output_model() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(dir.path())?;
    let input = dir.path().join("sheet.json");
    std::fs::write(
        &input,
        r#"{"assets":{"A":{"value":2}},"liabilities":{"L":{"value":1}},"currency":"USD"}"#,
    )?;

    let output = run_cli(&config, &["compute", "--input", input.to_str().unwrap()])?;
    assert!(output.status.success(), "{output:?}");

    let body: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(body["data"]["currency"], "USD");
    assert_eq!(body["data"]["calculated"]["netWorth"], "1");
    Ok(())
}

#[test]
fn empty_input_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(dir.path())?;
    let input = dir.path().join("empty.json");
    std::fs::write(&input, "  \n")?;

    let output = run_cli(&config, &["compute", "--input", input.to_str().unwrap()])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing balance sheet input"));
    Ok(())
}

#[test]
fn invalid_json_input_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(dir.path())?;
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{ \"assets\": ")?;

    let output = run_cli(&config, &["compute", "--input", input.to_str().unwrap()])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid JSON"));
    Ok(())
}
