//! # quizlint-cli — Quiz Content Validation CLI
//!
//! Provides the `quizlint` command-line interface over the validation
//! library.
//!
//! ## Subcommands
//!
//! - `quizlint validate [DIR]` — Validate every quiz file in a directory,
//!   write the per-file error report, and print a one-line summary.
//!
//! Validation findings are data, not process failures: `validate` exits
//! with code 0 however many files contained errors. A non-zero exit means
//! the run itself could not complete (quiz directory unlistable, report
//! unwritable).

pub mod validate;
