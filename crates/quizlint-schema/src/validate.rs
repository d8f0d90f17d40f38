//! # Directory Validation
//!
//! Walks a quiz directory, applies the parse → check pipeline to every
//! quiz file, and aggregates per-file errors into a
//! [`ValidationReport`].
//!
//! Per-file failures never abort the run: a file that cannot be read,
//! decoded, or parsed records a single parsing error and the walk
//! continues with the next file. The only fatal condition is failing to
//! list the directory itself.

use std::path::Path;

use thiserror::Error;

use quizlint_core::ValidationReport;

use crate::parser;
use crate::rules;

/// Reserved manifest filename, always excluded from validation.
///
/// The manifest is the quiz catalog index, not quiz content.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Error during directory validation.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The quiz directory could not be enumerated.
    #[error("cannot read quiz directory '{path}': {reason}")]
    DirectoryUnreadable {
        /// Path to the directory that failed to list.
        path: String,
        /// Underlying IO failure.
        reason: String,
    },
}

/// Validate every quiz file in a directory.
///
/// Covers each `*.json` entry except [`MANIFEST_FILE`]. Files are
/// processed in filename order so repeated runs over an unchanged
/// directory produce identical reports.
///
/// # Errors
///
/// Returns [`ValidateError::DirectoryUnreadable`] if the directory
/// listing itself fails. Per-file failures are recorded in the report
/// instead of propagating.
pub fn validate_directory(dir: &Path) -> Result<ValidationReport, ValidateError> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| ValidateError::DirectoryUnreadable {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut filenames: Vec<String> = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".json") && name != MANIFEST_FILE {
            filenames.push(name.to_string());
        }
    }
    filenames.sort();

    let mut report = ValidationReport::new();
    for filename in filenames {
        let errors = match std::fs::read_to_string(dir.join(&filename)) {
            Ok(text) => validate_source(&text),
            // Unreadable or non-UTF-8 content is indistinguishable from a
            // parse failure as far as the report is concerned.
            Err(e) => vec![format!("JSON parsing error: {e}")],
        };
        report.record_all(filename, errors);
    }

    Ok(report)
}

/// Apply the parse → check pipeline to quiz file contents.
///
/// A parse failure (malformed JSON or a duplicate key) yields a single
/// parsing error and suppresses all structural and content checks.
pub fn validate_source(text: &str) -> Vec<String> {
    match parser::parse_strict(text) {
        Ok(quiz) => rules::check_quiz(&quiz),
        Err(e) => vec![format!("JSON parsing error: {e}")],
    }
}
