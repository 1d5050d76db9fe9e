use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::discovery;
use crate::lints::require_justification::require_justification::require_justification;
use crate::location::{line_starts, locate};
use crate::rcfile::JustificationStore;
use crate::scan::scan_references;

/// Outcome of checking one file: its diagnostics plus the unique variable
/// names referenced in it, for the end-of-run summary.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub diagnostics: Vec<Diagnostic>,
    pub variables: Vec<String>,
}

/// Run-level aggregate built from the per-file reports, emitted in the run's
/// finalize path.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub files: Vec<FileSummary>,
    pub unique_variables: Vec<String>,
    /// The sidecar this run read from, if one was found.
    pub rc_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub file: PathBuf,
    pub variables: Vec<String>,
}

impl RunSummary {
    pub fn new(reports: &[(PathBuf, FileReport)], rc_file: Option<PathBuf>) -> Self {
        let files = reports
            .iter()
            .map(|(path, report)| FileSummary {
                file: path.clone(),
                variables: report.variables.clone(),
            })
            .collect();

        let mut unique: FxHashSet<String> = FxHashSet::default();
        for (_, report) in reports {
            unique.extend(report.variables.iter().cloned());
        }
        let mut unique_variables: Vec<String> = unique.into_iter().collect();
        unique_variables.sort();

        Self {
            files,
            unique_variables,
            rc_file,
        }
    }
}

pub fn check(config: Config) -> Vec<(PathBuf, Result<FileReport>)> {
    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let result = check_path(file, Arc::clone(&config));
            (file.clone(), result)
        })
        .collect()
}

pub fn check_path(path: &Path, config: Arc<Config>) -> Result<FileReport> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    // Rebuilt for every file on purpose: edits to the sidecar made while a
    // run is not in flight must be picked up without any cache invalidation.
    let store = load_store(&config);

    Ok(check_source(
        &contents,
        path,
        &store,
        config.min_justification_length,
    ))
}

/// The store for this file visit: the explicit `--rc-path` when it points at
/// a readable file, otherwise the nearest `.nextpublicrc` at or above the
/// search root, otherwise an empty store.
pub fn load_store(config: &Config) -> JustificationStore {
    match discovery::resolve_rc_path(config) {
        Some(path) => JustificationStore::load(&path),
        None => {
            debug!(
                root = %config.search_root.display(),
                "no .nextpublicrc found, treating every variable as unjustified"
            );
            JustificationStore::empty()
        }
    }
}

pub fn check_source(
    contents: &str,
    path: &Path,
    store: &JustificationStore,
    minimum: usize,
) -> FileReport {
    let starts = line_starts(contents);
    let mut diagnostics = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for reference in scan_references(contents) {
        seen.insert(reference.name.clone());
        if let Some(mut diagnostic) = require_justification(&reference, store, minimum) {
            diagnostic.filename = path.to_path_buf();
            diagnostic.location = Some(locate(contents, diagnostic.span.start, &starts));
            diagnostics.push(diagnostic);
        }
    }

    // References already come out in source order; sorting keeps the
    // guarantee explicit.
    diagnostics.sort();

    let mut variables: Vec<String> = seen.into_iter().collect();
    variables.sort();

    FileReport {
        diagnostics,
        variables,
    }
}
