//! # Validate Subcommand
//!
//! Validates every quiz file in a directory and writes the per-file
//! error report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quizlint_schema::validate_directory;

/// Default directory scanned for quiz files.
pub const DEFAULT_QUIZ_DIR: &str = "quizzes";

/// Default path of the written report artifact.
pub const DEFAULT_REPORT_FILE: &str = "validation_errors.json";

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing quiz JSON files.
    #[arg(default_value = DEFAULT_QUIZ_DIR)]
    pub dir: PathBuf,

    /// Path the error report is written to.
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    pub out: PathBuf,
}

/// Execute the validate subcommand.
///
/// Exits 0 whether or not files contained errors; only a run that cannot
/// complete (unlistable directory, unwritable report) returns an error.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    tracing::debug!(dir = %args.dir.display(), "validating quiz directory");

    let report = validate_directory(&args.dir)
        .with_context(|| format!("failed to validate '{}'", args.dir.display()))?;

    report
        .write_json(&args.out)
        .with_context(|| format!("failed to write report '{}'", args.out.display()))?;

    tracing::debug!(
        report = %args.out.display(),
        files = report.file_count(),
        "report written"
    );

    println!(
        "Validation complete, found errors in {} files.",
        report.file_count()
    );

    Ok(0)
}
