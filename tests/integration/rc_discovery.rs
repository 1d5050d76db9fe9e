use crate::helpers::{nextpub, stdout_of};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_look_for_rc_in_parent_directories() -> anyhow::Result<()> {
    let root_dir = TempDir::new()?;
    let root_path = root_dir.path();

    // Can't create a parent of tempdir, so create a "subdir" that mimicks the
    // current project directory and use "root_dir" as a parent directory.
    let subdir = root_path.join("subdir");
    fs::create_dir_all(&subdir)?;

    fs::write(
        subdir.join("app.js"),
        "const u = process.env.NEXT_PUBLIC_API_URL;\n",
    )?;

    // At this point there is no rc file anywhere, so the reference is
    // reported as unjustified.
    let output = nextpub(&subdir).arg(".").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("requires justification"));

    // Place an rc file in the root directory, which is the parent directory
    // of the current project. The upward search should find it.
    fs::write(
        root_path.join(".nextpublicrc"),
        r#"{"NEXT_PUBLIC_API_URL": "Needed for client-side API calls, reviewed by security"}"#,
    )?;

    let output = nextpub(&subdir).arg(".").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Used '"));
    Ok(())
}

#[test]
fn test_nearest_rc_takes_precedence() -> anyhow::Result<()> {
    let root_dir = TempDir::new()?;
    let root_path = root_dir.path();

    let subdir = root_path.join("subdir");
    fs::create_dir_all(&subdir)?;

    fs::write(
        subdir.join("app.js"),
        "const u = process.env.NEXT_PUBLIC_API_URL;\n",
    )?;

    // The parent rc justifies the variable, but the nearer one does not; the
    // nearer one wins, so the reference is flagged.
    fs::write(
        root_path.join(".nextpublicrc"),
        r#"{"NEXT_PUBLIC_API_URL": "Needed for client-side API calls, reviewed by security"}"#,
    )?;
    fs::write(subdir.join(".nextpublicrc"), "{}")?;

    let output = nextpub(&subdir).arg(".").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output)
        .contains("NEXT_PUBLIC variable 'NEXT_PUBLIC_API_URL' requires justification"));
    Ok(())
}

#[test]
fn test_key_value_fallback_format() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("app.js"),
        "const u = process.env.NEXT_PUBLIC_API_URL;\nconst g = process.env.NEXT_PUBLIC_GA_ID;\n",
    )?;
    fs::write(
        dir.path().join(".nextpublicrc"),
        r#"# justifications, one per line
NEXT_PUBLIC_API_URL="Needed for client-side API calls, reviewed by security"
not a valid line
"#,
    )?;

    let output = nextpub(dir.path()).arg(".").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    // The parsed entry clears one variable, the other is still flagged.
    assert!(!stdout.contains("'NEXT_PUBLIC_API_URL' requires justification"));
    assert!(stdout.contains("'NEXT_PUBLIC_GA_ID' requires justification"));
    Ok(())
}
