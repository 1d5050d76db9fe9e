use colored::Colorize;
use std::collections::HashMap;

use crate::check::RunSummary;
use crate::diagnostic::Diagnostic;
use crate::status::ExitStatus;

/// Per-rule violation counts plus the run-level aggregate of unique
/// `NEXT_PUBLIC_` variables discovered.
pub fn print_statistics(
    diagnostics: &[&Diagnostic],
    summary: &RunSummary,
) -> anyhow::Result<ExitStatus> {
    if diagnostics.is_empty() {
        println!("All checks passed!");
        print_aggregate(summary);
        return Ok(ExitStatus::Success);
    }

    // Hashmap with rule name as key and number of occurrences as value.
    let mut counts: HashMap<&String, usize> = HashMap::new();
    for diagnostic in diagnostics {
        *counts.entry(&diagnostic.message.name).or_default() += 1;
    }

    let mut sorted: Vec<_> = counts.iter().collect();
    sorted.sort_by_key(|(_, count)| **count);
    sorted.reverse();

    for (name, count) in sorted {
        println!("{:>5} {}", count.to_string().bold(), name.bold().red());
    }

    println!();
    print_aggregate(summary);

    Ok(ExitStatus::Failure)
}

fn print_aggregate(summary: &RunSummary) {
    println!(
        "Found {} unique NEXT_PUBLIC variable(s) across {} file(s).",
        summary.unique_variables.len(),
        summary.files.len()
    );
}
