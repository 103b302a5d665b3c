use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::service::service_model::GenerateRequest;
use crate::submission::submission_model::{SubmissionStatus, SubmissionView};

/// One line of the submission trace file.
///
/// A submission writes two lines: `Loading` with the full request snapshot,
/// then its outcome with the code size and locator count (or the error).
#[derive(Debug, Serialize)]
pub struct SubmissionTraceEvent {
    pub timestamp_ms: u128,
    pub attempt: u64,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<GenerateRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionTraceEvent {
    fn at(attempt: u64, status: &SubmissionStatus) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            attempt,
            status: status.label().to_string(),
            request: None,
            code_len: None,
            locator_count: None,
            error: None,
        }
    }

    /// The submission left the form: what exactly was sent.
    pub fn started(attempt: u64, request: &GenerateRequest) -> Self {
        Self {
            request: Some(request.clone()),
            ..Self::at(attempt, &SubmissionStatus::Loading)
        }
    }

    /// The submission resolved into `view`.
    pub fn resolved(attempt: u64, view: &SubmissionView) -> Self {
        let event = Self::at(attempt, &view.status);
        match &view.status {
            SubmissionStatus::Error(message) => Self {
                error: Some(message.clone()),
                ..event
            },
            _ => Self {
                code_len: Some(view.code.len()),
                locator_count: Some(view.locators.len()),
                ..event
            },
        }
    }
}
