use serde_json::{Value, json};

use crate::form::form_model::Language;
use crate::service::backend::GenerationBackend;
use crate::service::error::GenerateError;
use crate::service::service_model::GenerateRequest;

// ============================================================================
// Mock generator (for running without the generation service)
// ============================================================================

/// Offline stand-in that answers the way the generation service does when
/// its real workflow is unavailable: a short header for the chosen language
/// and three canned login-form locators.
pub struct MockGenerator;

impl MockGenerator {
    /// Build the response body for a request without going async.
    pub fn respond(request: &GenerateRequest) -> Value {
        let tool = request.selected_tool;
        let test_case = non_empty_or(&request.test_case, "GeneratedTest");
        let url = non_empty_or(&request.url, "https://example.com");

        let code = match request.selected_language {
            Language::Java => format!(
                "// Auto-generated {} test ({})\nimport org.openqa.selenium.WebDriver;\n// Navigate to {}\n",
                tool, test_case, url
            ),
            Language::Python => format!(
                "# Auto-generated {} test ({})\nfrom selenium import webdriver\n# Navigate to {}\n",
                tool, test_case, url
            ),
            Language::JavaScript => format!(
                "// Auto-generated {} test ({})\n// Use Playwright or Puppeteer to navigate to {}\n",
                tool, test_case, url
            ),
            Language::CSharp => format!(
                "// Auto-generated test ({}) for {} - navigate to {}\n",
                test_case, tool, url
            ),
        };

        json!({
            "generated_code": code,
            "extracted_xpaths": [
                canned_locator("input", "id", "username", "username_input"),
                canned_locator("input", "id", "password", "password_input"),
                canned_locator("button", "id", "login", "login_button"),
            ],
        })
    }
}

impl GenerationBackend for MockGenerator {
    async fn generate(&self, request: GenerateRequest) -> Result<Value, GenerateError> {
        tracing::info!("using offline mock generator");
        Ok(Self::respond(&request))
    }
}

fn canned_locator(tag: &str, attribute: &str, value: &str, variable_name: &str) -> Value {
    json!({
        "tag": tag,
        "attribute": attribute,
        "value": value,
        "variable_name": variable_name,
        "xpath": format!("//{}[@{}='{}']", tag, attribute, value),
    })
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
