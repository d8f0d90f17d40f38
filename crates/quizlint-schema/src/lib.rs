//! # quizlint-schema — Quiz Content Validation
//!
//! Runtime validation of quiz JSON documents.
//!
//! ## Validation Layers
//!
//! 1. **Parsing:** the file must parse as JSON and contain no duplicate
//!    object keys at any nesting depth ([`parser`]). A parse failure is
//!    fatal to that file's validation — no further checks run.
//!
//! 2. **Structural validation:** required fields must be present at quiz,
//!    section, and item level ([`rules`]). Checks are independent; a
//!    missing `sections` or `items` list suppresses only its nested
//!    checks.
//!
//! 3. **Content heuristics:** item text fields are scanned for leftover
//!    generation commentary ("AI artifacts") that should never appear in
//!    published quiz text ([`rules`]).
//!
//! The [`validate`] module walks a quiz directory, applies all three
//! layers per file, and aggregates errors into a
//! [`ValidationReport`](quizlint_core::ValidationReport). Per-file
//! failures never abort the walk.

pub mod parser;
pub mod rules;
pub mod validate;

// Re-export primary entry points for ergonomic imports.
pub use parser::parse_strict;
pub use rules::{check_quiz, ARTIFACT_MARKERS, OPTION_TYPES};
pub use validate::{validate_directory, validate_source, ValidateError, MANIFEST_FILE};
