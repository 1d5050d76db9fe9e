use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

/// A command for the built `nextpub` binary.
pub fn nextpub(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nextpub").expect("binary should be built");
    cmd.current_dir(dir);
    cmd
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
