use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::check::{FileSummary, RunSummary};
use crate::diagnostic::Diagnostic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    /// Print diagnostics in a concise format, one per line
    Concise,
    /// Print diagnostics as GitHub workflow commands
    Github,
    /// Print diagnostics as JSON
    Json,
}

/// Read failures go to stderr so they don't mix with diagnostics, whatever
/// the output format.
pub fn print_errors(errors: &[(PathBuf, anyhow::Error)]) {
    for (_path, err) in errors {
        eprintln!("{}: {}", "Error".red().bold(), err);
    }
}

/// Takes the diagnostics and per-file errors of a run and displays them in
/// different ways depending on the `--output-format` provided by the user.
pub trait Emitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
        summary: &RunSummary,
    ) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
        summary: &RunSummary,
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        if !errors.is_empty() {
            writer.flush()?; // Flush before writing to stderr
            print_errors(errors);
        }

        for diagnostic in diagnostics {
            let (row, col) = match diagnostic.location {
                Some(loc) => (loc.row(), loc.column() + 1), // Convert to 1-based for display
                None => (0, 0),
            };
            writeln!(
                writer,
                "{} [{}:{}] {} {}",
                diagnostic.filename.display().to_string().white(),
                row,
                col,
                diagnostic.message.name.red(),
                diagnostic.message.body
            )?;
        }

        if !diagnostics.is_empty() {
            writeln!(writer)?;
        }
        for FileSummary { file, variables } in &summary.files {
            if !variables.is_empty() {
                writeln!(
                    writer,
                    "{}: {} unique NEXT_PUBLIC variable(s)",
                    file.display(),
                    variables.len()
                )?;
            }
        }
        writeln!(
            writer,
            "Found {} unique NEXT_PUBLIC variable(s) across {} file(s).",
            summary.unique_variables.len(),
            summary.files.len()
        )?;

        writer.flush()?;
        Ok(())
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
        _summary: &RunSummary,
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        if !errors.is_empty() {
            print_errors(errors);
        }
        for diagnostic in diagnostics {
            let (row, col) = match diagnostic.location {
                Some(loc) => (loc.row(), loc.column() + 1),
                None => (0, 0),
            };
            writeln!(
                writer,
                "::error file={},line={},col={},title={}::{}",
                diagnostic.filename.display(),
                row,
                col,
                diagnostic.message.name,
                diagnostic.message.body
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    diagnostics: &'a [&'a Diagnostic],
    errors: Vec<JsonError>,
    files: &'a [FileSummary],
    unique_variables: &'a [String],
    rc_file: Option<&'a Path>,
}

#[derive(Debug, Serialize)]
struct JsonError {
    file: PathBuf,
    error: String,
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
        summary: &RunSummary,
    ) -> anyhow::Result<()> {
        let output = JsonOutput {
            diagnostics,
            errors: errors
                .iter()
                .map(|(file, err)| JsonError {
                    file: file.clone(),
                    error: format!("{err:#}"),
                })
                .collect(),
            files: &summary.files,
            unique_variables: &summary.unique_variables,
            rc_file: summary.rc_file.as_deref(),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
