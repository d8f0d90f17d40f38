//! # Validation Report
//!
//! The accumulating per-file error mapping produced by a validation run.
//!
//! A filename appears as a key iff at least one error was recorded for
//! it; files that pass every check leave no trace in the report. The
//! mapping is ordered by filename so repeated runs against an unchanged
//! directory serialize byte-identically.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::CoreError;

/// Per-file validation errors, keyed by filename.
///
/// Serializes transparently as a JSON object: keys are filenames, values
/// are the ordered error lists recorded for them.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    files: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single error against a file.
    pub fn record(&mut self, filename: impl Into<String>, error: impl Into<String>) {
        self.files
            .entry(filename.into())
            .or_default()
            .push(error.into());
    }

    /// Record a batch of errors against a file.
    ///
    /// An empty batch records nothing — clean files never gain a report
    /// key.
    pub fn record_all(&mut self, filename: impl Into<String>, errors: Vec<String>) {
        if errors.is_empty() {
            return;
        }
        self.files
            .entry(filename.into())
            .or_default()
            .extend(errors);
    }

    /// Number of files with at least one error.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no file recorded any error.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Errors recorded for a file, if any.
    pub fn errors_for(&self, filename: &str) -> Option<&[String]> {
        self.files.get(filename).map(|errors| errors.as_slice())
    }

    /// Filenames with errors, in report order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|name| name.as_str())
    }

    /// Serialize the report with 2-space indentation.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        let mut out = serde_json::to_string_pretty(&self.files)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the report artifact, replacing any previous report at `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), CoreError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
