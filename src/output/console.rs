use crate::submission::submission_model::{ExtractedLocator, SubmissionStatus, SubmissionView};

// ============================================================================
// Console renderer — formatted terminal output
// ============================================================================

/// Format a submission for the terminal.
///
/// Produces output like:
/// ```text
/// === Generation: Success ===
///
/// print(1)
///
/// === Extracted locators (1) ===
///   loginBtn  //button[@id='login']
/// ```
pub fn format_console_output(view: &SubmissionView) -> String {
    let mut out = String::new();

    match &view.status {
        SubmissionStatus::Idle => out.push_str("=== Generation: nothing submitted ===\n"),
        SubmissionStatus::Loading => out.push_str("=== Generation: in progress... ===\n"),
        SubmissionStatus::Error(message) => {
            out.push_str("=== Generation: Error ===\n\n");
            out.push_str(&format!("\u{2717} ERROR  {}\n", message));
        }
        SubmissionStatus::Success => {
            out.push_str("=== Generation: Success ===\n\n");
            out.push_str(&view.code);
            if !view.code.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&format_locator_table(&view.locators));
        }
    }

    out
}

/// Locator listing with variable names padded to a common width.
pub fn format_locator_table(locators: &[ExtractedLocator]) -> String {
    if locators.is_empty() {
        return "=== No locators extracted ===\n".to_string();
    }

    let width = locators
        .iter()
        .map(|l| l.variable_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("=== Extracted locators ({}) ===\n", locators.len());
    for locator in locators {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            locator.variable_name,
            locator.xpath,
            width = width
        ));
    }
    out
}

/// Pretty JSON form of the same view, for piping into other tools.
pub fn format_json_output(view: &SubmissionView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
