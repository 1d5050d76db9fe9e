//! Linter that enforces documented justifications for `NEXT_PUBLIC_`
//! environment variables.
//!
//! Every reference to a `NEXT_PUBLIC_`-prefixed variable in the checked
//! JS/TS sources must have an entry of a minimum length in a `.nextpublicrc`
//! sidecar file, found by searching upward from the working directory.

use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

pub mod args;
pub mod check;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod lints;
pub mod location;
pub mod logging;
pub mod output_format;
pub mod rcfile;
pub mod scan;
pub mod statistics;
pub mod status;


use crate::args::Args;
use crate::check::RunSummary;
use crate::config::build_config;
use crate::diagnostic::Diagnostic;
use crate::output_format::{ConciseEmitter, Emitter, GithubEmitter, JsonEmitter, OutputFormat};
use crate::status::ExitStatus;

pub fn run(args: Args) -> Result<ExitStatus> {
    let start = args.with_timing.then(Instant::now);

    let paths = discovery::discover_source_paths(&args.paths);
    if paths.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No JavaScript or TypeScript files found under the given path(s)."
                .white()
                .bold()
        );
        return Ok(ExitStatus::Success);
    }

    let config = build_config(&args, paths)?;

    // Resolved once here for end-of-run reporting; each file visit resolves
    // and re-reads the sidecar itself so mid-run edits are honored.
    let rc_file = discovery::resolve_rc_path(&config);
    let rc_from_parent = rc_file
        .as_ref()
        .filter(|path| path.parent() != Some(config.search_root.as_path()))
        .cloned();

    let file_results = check::check(config);

    let mut all_errors = Vec::new();
    let mut reports = Vec::new();
    for (path, result) in file_results {
        match result {
            Ok(report) => reports.push((path, report)),
            Err(err) => all_errors.push((path, err)),
        }
    }
    reports.sort_by(|a, b| a.0.cmp(&b.0));

    // Flatten all diagnostics into a single vector and sort globally
    let mut all_diagnostics: Vec<&Diagnostic> = reports
        .iter()
        .flat_map(|(_path, report)| report.diagnostics.iter())
        .collect();
    all_diagnostics.sort();

    let summary = RunSummary::new(&reports, rc_file);

    if args.statistics {
        output_format::print_errors(&all_errors);
        let status = statistics::print_statistics(&all_diagnostics, &summary)?;
        if !all_errors.is_empty() {
            return Ok(ExitStatus::Error);
        }
        return Ok(status);
    }

    let mut stdout = std::io::stdout();
    match args.output_format {
        OutputFormat::Concise => {
            ConciseEmitter.emit(&mut stdout, &all_diagnostics, &all_errors, &summary)?;
        }
        OutputFormat::Github => {
            GithubEmitter.emit(&mut stdout, &all_diagnostics, &all_errors, &summary)?;
        }
        OutputFormat::Json => {
            JsonEmitter.emit(&mut stdout, &all_diagnostics, &all_errors, &summary)?;
        }
    }

    // For human-readable formats, print sidecar and timing info. Skip for
    // JSON/GitHub to avoid corrupting structured output.
    if args.output_format == OutputFormat::Concise {
        if summary.rc_file.is_none() {
            println!(
                "\nNote: no .nextpublicrc file found, every NEXT_PUBLIC variable is reported as unjustified."
            );
        } else if let Some(path) = rc_from_parent {
            println!("\nUsed '{}'", path.display());
        }

        if let Some(start) = start {
            let duration = start.elapsed();
            println!("\nChecked files in: {duration:?}");
        }
    }

    if !all_errors.is_empty() {
        return Ok(ExitStatus::Error);
    }

    if all_diagnostics.is_empty() {
        return Ok(ExitStatus::Success);
    }

    Ok(ExitStatus::Failure)
}
