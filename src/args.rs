use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_MIN_JUSTIFICATION_LENGTH;
use crate::output_format::OutputFormat;

/// Lint JavaScript/TypeScript sources for `NEXT_PUBLIC_` environment
/// variables lacking a documented justification.
#[derive(Parser, Debug)]
#[command(name = "nextpub", version, about, long_about = None)]
pub struct Args {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Explicit path to the justification file, instead of searching upward
    /// for a `.nextpublicrc`
    #[arg(long, value_name = "PATH")]
    pub rc_path: Option<PathBuf>,

    /// Minimum number of characters a justification must have
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MIN_JUSTIFICATION_LENGTH)]
    pub min_justification_length: usize,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = OutputFormat::Concise)]
    pub output_format: OutputFormat,

    /// Print the number of violations per rule instead of individual
    /// diagnostics
    #[arg(long)]
    pub statistics: bool,

    /// Print how long the check took
    #[arg(long)]
    pub with_timing: bool,
}
