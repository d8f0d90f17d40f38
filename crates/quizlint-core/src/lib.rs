//! # quizlint-core — Shared Types
//!
//! Foundation crate for the quizlint workspace. Holds the types shared
//! between the validation library and the CLI:
//!
//! - [`ValidationReport`] — the per-file error mapping accumulated during
//!   a validation run and written out as the report artifact.
//! - [`CoreError`] — error hierarchy for report serialization and IO.

pub mod error;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use report::ValidationReport;
