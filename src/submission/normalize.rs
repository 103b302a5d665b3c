use serde_json::Value;

use crate::submission::submission_model::{ExtractedLocator, GeneratedArtifact, GeneratedOutput};

// ============================================================================
// Response normalization
// ============================================================================

/// Top-level fields that may carry the generated code, highest priority first.
pub const CODE_FIELDS: [&str; 3] = ["generated_code", "result", "result_text"];

/// Top-level fields that may carry the locator list, highest priority first.
pub const LOCATOR_FIELDS: [&str; 4] = ["extracted_xpaths", "extractedXpaths", "xpaths", "extracted"];

/// Reduce a successful response body to code text plus locators.
///
/// Missing fields are not an error: the code falls back to the whole body
/// serialized as JSON and the locator list falls back to empty.
pub fn normalize(body: &Value) -> GeneratedOutput {
    GeneratedOutput {
        artifact: GeneratedArtifact {
            code: extract_code(body),
        },
        locators: extract_locators(body),
    }
}

pub fn extract_code(body: &Value) -> String {
    match first_present(body, &CODE_FIELDS) {
        Some(Value::String(code)) => code.clone(),
        Some(other) => other.to_string(),
        None => body.to_string(),
    }
}

/// The first present candidate decides, even if it is an empty array or not
/// an array at all; both yield no locators.
pub fn extract_locators(body: &Value) -> Vec<ExtractedLocator> {
    match first_present(body, &LOCATOR_FIELDS) {
        Some(Value::Array(entries)) => entries.iter().map(locator_from_entry).collect(),
        _ => Vec::new(),
    }
}

/// First candidate field whose value is present. Null, false, zero and the
/// empty string count as absent.
fn first_present<'a>(body: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|name| body.get(*name))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn locator_from_entry(entry: &Value) -> ExtractedLocator {
    ExtractedLocator {
        variable_name: text_field(entry, "variable_name"),
        xpath: text_field(entry, "xpath"),
    }
}

fn text_field(entry: &Value, name: &str) -> String {
    match entry.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
