use serde::{Deserialize, Serialize};

/// Lifecycle of the current generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Loading => "Loading",
            SubmissionStatus::Success => "Success",
            SubmissionStatus::Error(_) => "Error",
        }
    }
}

/// One page element the service discovered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLocator {
    #[serde(alias = "variable_name")]
    pub variable_name: String,
    pub xpath: String,
}

impl ExtractedLocator {
    pub fn new(variable_name: impl Into<String>, xpath: impl Into<String>) -> Self {
        Self {
            variable_name: variable_name.into(),
            xpath: xpath.into(),
        }
    }
}

/// Source text produced by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub code: String,
}

/// A successful response body reduced to what gets displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedOutput {
    pub artifact: GeneratedArtifact,
    pub locators: Vec<ExtractedLocator>,
}

/// Everything the presentation layer reads, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub status: SubmissionStatus,
    pub error: Option<String>,
    pub code: String,
    pub locators: Vec<ExtractedLocator>,
}

impl SubmissionView {
    pub(crate) fn loading() -> Self {
        Self {
            status: SubmissionStatus::Loading,
            ..Self::default()
        }
    }

    pub(crate) fn succeeded(output: GeneratedOutput) -> Self {
        Self {
            status: SubmissionStatus::Success,
            error: None,
            code: output.artifact.code,
            locators: output.locators,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            status: SubmissionStatus::Error(message.clone()),
            error: Some(message),
            ..Self::default()
        }
    }
}
