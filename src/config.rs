use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::args::Args;

/// Default minimum number of characters a justification must have.
pub const DEFAULT_MIN_JUSTIFICATION_LENGTH: usize = 20;

#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to files to lint.
    pub paths: Vec<PathBuf>,
    /// Directory where the upward `.nextpublicrc` search starts.
    pub search_root: PathBuf,
    /// Explicit sidecar path passed with `--rc-path`, if any.
    pub rc_path: Option<PathBuf>,
    /// Justifications shorter than this are reported.
    pub min_justification_length: usize,
}

pub fn build_config(args: &Args, paths: Vec<PathBuf>) -> Result<Config> {
    let search_root = env::current_dir().context("Failed to resolve current directory")?;

    // A relative --rc-path is resolved against the working directory.
    let rc_path = args
        .rc_path
        .as_ref()
        .map(|path| search_root.join(path));

    Ok(Config {
        paths,
        search_root,
        rc_path,
        min_justification_length: args.min_justification_length,
    })
}
