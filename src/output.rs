//! Summary output: console printing and saving with a provenance header.

use colored::Colorize;
use std::path::Path;
use thiserror::Error;

/// Filename used when the user accepts the save prompt without naming one
pub const DEFAULT_OUTPUT_FILE: &str = "summary.txt";

const DELIMITER: &str = "========================================";

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write summary file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Print the summary to the console between visual delimiters
pub fn print_summary(summary: &str) {
    println!("\n{}", DELIMITER.dimmed());
    println!("{}", summary);
    println!("{}\n", DELIMITER.dimmed());
}

/// Write the summary to `target`, overwriting any existing file.
///
/// The file starts with a one-line provenance header naming the source
/// document, then a blank line, then the summary body.
pub fn write_summary(target: &Path, source: &Path, summary: &str) -> Result<(), OutputError> {
    let content = format!("Summary of: {}\n\n{}\n", source.display(), summary);
    std::fs::write(target, content)?;
    Ok(())
}
