use serde::{Deserialize, Serialize};

use crate::form::form_model::{FormFields, Language, Tool};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

// ============================================================================
// Outbound request
// ============================================================================

/// Body of `POST /generate`. Mirrors the form fields verbatim: same names,
/// no trimming, every field present even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub url: String,
    pub html: String,
    pub test_case: String,
    pub test_data: String,
    pub test_steps: String,
    pub selected_language: Language,
    pub selected_tool: Tool,
}

impl From<&FormFields> for GenerateRequest {
    fn from(fields: &FormFields) -> Self {
        Self {
            url: fields.url.clone(),
            html: fields.html.clone(),
            test_case: fields.test_case.clone(),
            test_data: fields.test_data.clone(),
            test_steps: fields.test_steps.clone(),
            selected_language: fields.selected_language,
            selected_tool: fields.selected_tool,
        }
    }
}

// ============================================================================
// Health check
// ============================================================================

/// Reply of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    /// Whether the service has its real generation workflow loaded, as
    /// opposed to its canned fallback generator.
    #[serde(default)]
    pub lang_app_available: bool,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

// ============================================================================
// Service configuration
// ============================================================================

/// Where the generation service lives. Resolved once at startup and handed
/// to the backend; never re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `BACKEND_URL` from the process environment.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(std::env::var(BACKEND_URL_ENV).ok()))
    }
}

/// Pick the base URL from an environment value, falling back to the
/// localhost default when unset or blank.
pub fn resolve_base_url(env_value: Option<String>) -> String {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
