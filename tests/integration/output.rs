use crate::helpers::{nextpub, stderr_of, stdout_of};
use std::fs;
use tempfile::TempDir;

fn fixture() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("app.js"),
        "const k = process.env.NEXT_PUBLIC_API_KEY;\nconst f = process.env.NEXT_PUBLIC_FLAG;\n",
    )?;
    fs::write(
        dir.path().join(".nextpublicrc"),
        r#"{"NEXT_PUBLIC_FLAG": "short"}"#,
    )?;
    Ok(dir)
}

#[test]
fn test_json_output() -> anyhow::Result<()> {
    let dir = fixture()?;

    let output = nextpub(dir.path())
        .args([".", "--output-format", "json"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    let diagnostics = parsed["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["message"]["name"], "require-justification");
    assert_eq!(diagnostics[1]["message"]["name"], "justification-length");

    let unique = parsed["unique_variables"].as_array().unwrap();
    assert_eq!(unique.len(), 2);
    assert!(parsed["rc_file"].as_str().unwrap().ends_with(".nextpublicrc"));
    assert!(parsed["errors"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_github_output() -> anyhow::Result<()> {
    let dir = fixture()?;

    let output = nextpub(dir.path())
        .args([".", "--output-format", "github"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("::error file="));
    assert!(stdout.contains("line=1,col=23,title=require-justification"));
    Ok(())
}

#[test]
fn test_statistics_output() -> anyhow::Result<()> {
    let dir = fixture()?;

    let output = nextpub(dir.path()).args([".", "--statistics"]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("require-justification"));
    assert!(stdout.contains("justification-length"));
    assert!(stdout.contains("Found 2 unique NEXT_PUBLIC variable(s) across 1 file(s)."));
    Ok(())
}

#[test]
fn test_statistics_all_checks_passed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("app.js"), "const a = 1;\n")?;

    let output = nextpub(dir.path()).args([".", "--statistics"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("All checks passed!"));
    Ok(())
}

#[test]
fn test_statistics_reports_read_errors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("broken.js"), [0xff, 0xfe, 0xfd])?;

    let output = nextpub(dir.path()).args([".", "--statistics"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read file"));
    Ok(())
}

#[test]
fn test_github_output_reports_read_errors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("broken.js"), [0xff, 0xfe, 0xfd])?;

    let output = nextpub(dir.path())
        .args([".", "--output-format", "github"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read file"));
    Ok(())
}

#[test]
fn test_with_timing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("app.js"), "const a = 1;\n")?;

    let output = nextpub(dir.path()).args([".", "--with-timing"]).output()?;
    assert!(stdout_of(&output).contains("Checked files in:"));
    Ok(())
}
