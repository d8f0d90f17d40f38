//! # Quiz Validation Rules
//!
//! Structural schema checks and content-quality heuristics for a parsed
//! quiz document.
//!
//! ## Structural checks
//!
//! A quiz requires `id`, `title`, and `sections`; a section requires
//! `title` and `items`; an item requires `type`, `q`, `a`, and
//! `explanation`, plus `options` for choice-style types. Checks are
//! evaluated independently — no missing field hides another — except
//! that a missing `sections` list suppresses all section checks, and a
//! missing `items` list suppresses item checks for that section only.
//!
//! ## Content heuristics
//!
//! The `q`, `a`, and `explanation` text of every item is scanned
//! case-insensitively for leftover generation commentary. At most one
//! artifact error is recorded per field: the first matching marker wins.

use serde_json::Value;

/// Marker phrases indicating leftover generation commentary in quiz text.
///
/// Scanned in order; matching is case-insensitive substring search.
pub const ARTIFACT_MARKERS: &[&str] = &[
    "Wait, fixing",
    "Wait, my generation",
    "Fix Gen",
    "Fix:",
    "Real:",
    "Fixing generation",
    "Fixing.",
    "Stopping.",
    "Wait, ",
];

/// Item types that must carry an `options` list.
pub const OPTION_TYPES: &[&str] = &["multiple-choice", "true-false"];

/// Required fields on every item.
const ITEM_FIELDS: &[&str] = &["type", "q", "a", "explanation"];

/// Item text fields scanned by the content heuristics, in reporting order.
const TEXT_FIELDS: &[&str] = &["q", "a", "explanation"];

/// Run every structural and content check against a parsed quiz document.
///
/// Returns one human-readable error string per violation: top-level
/// fields first, then sections and their items in document order. Item
/// indices are zero-based and reset per section. An empty vector means
/// the quiz passed every check.
pub fn check_quiz(quiz: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    // Presence checks via Value::get: a non-object top level has no keys,
    // so all three report missing.
    if quiz.get("id").is_none() {
        errors.push("Missing 'id'".to_string());
    }
    if quiz.get("title").is_none() {
        errors.push("Missing 'title'".to_string());
    }

    match quiz.get("sections") {
        None => errors.push("Missing 'sections'".to_string()),
        Some(sections) => {
            for (s_idx, section) in sections.as_array().into_iter().flatten().enumerate() {
                check_section(s_idx, section, &mut errors);
            }
        }
    }

    errors
}

/// Check one section: its own required fields, then its items.
fn check_section(s_idx: usize, section: &Value, errors: &mut Vec<String>) {
    if section.get("title").is_none() {
        errors.push(format!("Section {s_idx} missing 'title'"));
    }

    match section.get("items") {
        None => errors.push(format!("Section {s_idx} missing 'items'")),
        Some(items) => {
            for (i_idx, item) in items.as_array().into_iter().flatten().enumerate() {
                check_item(i_idx, item, errors);
            }
        }
    }
}

/// Check one item: required fields, artifact markers, and the `options`
/// requirement for choice-style types.
fn check_item(i_idx: usize, item: &Value, errors: &mut Vec<String>) {
    for field in ITEM_FIELDS {
        if item.get(*field).is_none() {
            errors.push(format!("Item {i_idx} missing '{field}'"));
        }
    }

    // Artifact scan runs whether or not the field is present; a missing
    // or non-string field scans as the empty string.
    for field in TEXT_FIELDS {
        let text = item.get(*field).and_then(Value::as_str).unwrap_or("");
        if let Some(marker) = first_artifact(text) {
            errors.push(format!(
                "Item {i_idx} {field} contains AI artifact: '{marker}'"
            ));
        }
    }

    if let Some(item_type) = item.get("type").and_then(Value::as_str) {
        if OPTION_TYPES.contains(&item_type) && item.get("options").is_none() {
            errors.push(format!(
                "Item {i_idx} missing 'options' for type {item_type}"
            ));
        }
    }
}

/// First artifact marker matching the text, case-insensitively.
fn first_artifact(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    ARTIFACT_MARKERS
        .iter()
        .copied()
        .find(|marker| lowered.contains(&marker.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_item() -> Value {
        json!({
            "type": "self-eval",
            "q": "What year did the war end?",
            "a": "1945",
            "explanation": "The war ended in 1945."
        })
    }

    fn valid_quiz() -> Value {
        json!({
            "id": "history_easy_01",
            "title": "Easy History Quiz 1",
            "sections": [
                {"title": "History", "items": [valid_item()]}
            ]
        })
    }

    // -----------------------------------------------------------------------
    // Top-level structural checks
    // -----------------------------------------------------------------------

    #[test]
    fn valid_quiz_has_no_errors() {
        assert!(check_quiz(&valid_quiz()).is_empty());
    }

    #[test]
    fn missing_top_level_fields_reported_independently() {
        let errors = check_quiz(&json!({"sections": []}));
        assert_eq!(errors, ["Missing 'id'", "Missing 'title'"]);
    }

    #[test]
    fn missing_sections_is_the_only_section_error() {
        let errors = check_quiz(&json!({"id": "x", "title": "y"}));
        assert_eq!(errors, ["Missing 'sections'"]);
    }

    #[test]
    fn non_object_top_level_reports_all_fields_missing() {
        let errors = check_quiz(&json!(["not", "a", "quiz"]));
        assert_eq!(errors, ["Missing 'id'", "Missing 'title'", "Missing 'sections'"]);
    }

    // -----------------------------------------------------------------------
    // Section checks
    // -----------------------------------------------------------------------

    #[test]
    fn section_missing_title_and_items() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(
            errors,
            ["Section 0 missing 'title'", "Section 0 missing 'items'"]
        );
    }

    #[test]
    fn missing_items_suppresses_item_checks_for_that_section_only() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [
                {"title": "first"},
                {"title": "second", "items": [{}]}
            ]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(errors[0], "Section 0 missing 'items'");
        // The second section's item is still checked, with its own index.
        assert!(errors.contains(&"Item 0 missing 'type'".to_string()));
    }

    #[test]
    fn item_indices_reset_per_section() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [
                {"title": "a", "items": [{}]},
                {"title": "b", "items": [valid_item(), {}]}
            ]
        });
        let errors = check_quiz(&quiz);
        let missing_type: Vec<&String> =
            errors.iter().filter(|e| e.contains("missing 'type'")).collect();
        assert_eq!(missing_type, ["Item 0 missing 'type'", "Item 1 missing 'type'"]);
    }

    #[test]
    fn non_array_sections_yields_no_nested_errors() {
        let quiz = json!({"id": "x", "title": "y", "sections": "oops"});
        assert!(check_quiz(&quiz).is_empty());
    }

    // -----------------------------------------------------------------------
    // Item checks
    // -----------------------------------------------------------------------

    #[test]
    fn empty_item_reports_all_required_fields() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{}]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(
            errors,
            [
                "Item 0 missing 'type'",
                "Item 0 missing 'q'",
                "Item 0 missing 'a'",
                "Item 0 missing 'explanation'",
            ]
        );
    }

    #[test]
    fn multiple_choice_without_options() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "multiple-choice",
                "q": "Pick one.",
                "a": "A",
                "explanation": "Because."
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(errors, ["Item 0 missing 'options' for type multiple-choice"]);
    }

    #[test]
    fn true_false_without_options() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "true-false",
                "q": "True or false?",
                "a": "True",
                "explanation": "It is."
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(errors, ["Item 0 missing 'options' for type true-false"]);
    }

    #[test]
    fn options_error_reported_alongside_missing_fields() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{"type": "multiple-choice"}]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(
            errors,
            [
                "Item 0 missing 'q'",
                "Item 0 missing 'a'",
                "Item 0 missing 'explanation'",
                "Item 0 missing 'options' for type multiple-choice",
            ]
        );
    }

    #[test]
    fn self_eval_needs_no_options() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [valid_item()]}]
        });
        assert!(check_quiz(&quiz).is_empty());
    }

    #[test]
    fn options_present_satisfies_choice_types() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "multiple-choice",
                "q": "Pick one.",
                "a": "A",
                "explanation": "Because.",
                "options": ["A", "B", "C"]
            }]}]
        });
        assert!(check_quiz(&quiz).is_empty());
    }

    // -----------------------------------------------------------------------
    // Artifact heuristics
    // -----------------------------------------------------------------------

    #[test]
    fn artifact_in_question_text() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "self-eval",
                "q": "Wait, I made an error",
                "a": "fine",
                "explanation": "fine"
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(errors, ["Item 0 q contains AI artifact: 'Wait, '"]);
    }

    #[test]
    fn artifact_match_is_case_insensitive() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "self-eval",
                "q": "fine",
                "a": "WAIT, FIXING the answer",
                "explanation": "fine"
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(errors, ["Item 0 a contains AI artifact: 'Wait, fixing'"]);
    }

    #[test]
    fn only_first_marker_reported_per_field() {
        // "Fix: ... Stopping." matches both "Fix:" and "Stopping." —
        // only the earlier marker in the list is reported.
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "self-eval",
                "q": "fine",
                "a": "fine",
                "explanation": "Fix: rewritten. Stopping."
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(errors, ["Item 0 explanation contains AI artifact: 'Fix:'"]);
    }

    #[test]
    fn artifacts_reported_per_field_independently() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "self-eval",
                "q": "Wait, fixing this question",
                "a": "Real: the answer",
                "explanation": "fine"
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert_eq!(
            errors,
            [
                "Item 0 q contains AI artifact: 'Wait, fixing'",
                "Item 0 a contains AI artifact: 'Real:'",
            ]
        );
    }

    #[test]
    fn artifact_scan_runs_even_when_fields_missing() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "q": "Fixing. Done now."
            }]}]
        });
        let errors = check_quiz(&quiz);
        assert!(errors.contains(&"Item 0 missing 'type'".to_string()));
        assert!(errors.contains(&"Item 0 q contains AI artifact: 'Fixing.'".to_string()));
    }

    #[test]
    fn non_string_text_field_is_not_scanned() {
        let quiz = json!({
            "id": "x", "title": "y",
            "sections": [{"title": "s", "items": [{
                "type": "self-eval",
                "q": 42,
                "a": "fine",
                "explanation": "fine"
            }]}]
        });
        assert!(check_quiz(&quiz).is_empty());
    }

    #[test]
    fn clean_text_matches_no_marker() {
        assert_eq!(first_artifact("What is the capital of France?"), None);
        assert_eq!(first_artifact(""), None);
    }

    #[test]
    fn marker_list_order_is_fixed() {
        // "Wait, " must stay last: it is a prefix of the two specific
        // "Wait," markers and would otherwise shadow them.
        assert_eq!(ARTIFACT_MARKERS.first(), Some(&"Wait, fixing"));
        assert_eq!(ARTIFACT_MARKERS.last(), Some(&"Wait, "));
        assert_eq!(ARTIFACT_MARKERS.len(), 9);
    }
}
