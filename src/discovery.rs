use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;

/// File name of the justification sidecar.
pub const RC_FILE_NAME: &str = ".nextpublicrc";

/// Extensions of files that get checked.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// For each provided `path`, recursively collect the JS/TS files underneath
/// it. Paths that point directly at a file are kept as-is if the extension
/// matches. The result is sorted so diagnostics come out in a stable order.
pub fn discover_source_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = paths
        .iter()
        .flat_map(|path| {
            WalkDir::new(path.as_ref())
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .filter(|entry| has_source_extension(entry.path()))
                .map(|entry| entry.path().to_path_buf())
        })
        .collect();
    files.sort();
    files.dedup();
    files
}

/// Walk up from `start`, looking for a `.nextpublicrc`. The search stops at
/// the filesystem root; finding nothing is not an error.
pub fn find_rc_upward(start: &Path) -> Option<PathBuf> {
    for ancestor in start.ancestors() {
        let candidate = ancestor.join(RC_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found justification file");
            return Some(candidate);
        }
    }
    None
}

/// The sidecar path this run reads from: the explicit `--rc-path` when given
/// and present, otherwise the nearest `.nextpublicrc` above the search root.
pub fn resolve_rc_path(config: &Config) -> Option<PathBuf> {
    if let Some(rc_path) = &config.rc_path {
        if rc_path.is_file() {
            return Some(rc_path.clone());
        }
    }
    find_rc_upward(&config.search_root)
}
