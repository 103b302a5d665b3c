use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::form::form_state::FormState;
use crate::output::clipboard::Clipboard;
use crate::service::backend::GenerationBackend;
use crate::service::error::GenerateError;
use crate::submission::normalize::normalize;
use crate::submission::submission_model::{ExtractedLocator, SubmissionStatus, SubmissionView};
use crate::trace::logger::TraceLogger;

/// Shown when the service fails without an error body.
pub const GENERIC_FAILURE: &str = "Failed to generate code";

/// Owns the lifecycle of generation requests:
///
/// ```text
/// Idle ──submit──▶ Loading ──response──▶ Success | Error
///                     ▲                       │
///                     └────────submit─────────┘
/// ```
///
/// At most one request is in flight. `submit` returns as soon as the request
/// is spawned; the request task itself publishes the outcome when the
/// response arrives, so subscribers see `Success` or `Error` without anyone
/// awaiting `settle`. Both failure kinds end up as `SubmissionStatus::Error`,
/// never as a returned error.
pub struct SubmissionController<B: GenerationBackend> {
    backend: Arc<B>,
    view: Arc<watch::Sender<SubmissionView>>,
    in_flight: Option<JoinHandle<()>>,
    tracer: Arc<TraceLogger>,
    attempt: u64,
}

impl<B: GenerationBackend> SubmissionController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_shared_backend(Arc::new(backend))
    }

    pub fn with_shared_backend(backend: Arc<B>) -> Self {
        let (view, _) = watch::channel(SubmissionView::default());
        Self {
            backend,
            view: Arc::new(view),
            in_flight: None,
            tracer: Arc::new(TraceLogger::disabled()),
            attempt: 0,
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Arc::new(tracer);
        self
    }

    // ---- Presentation contract ----

    /// Receive the whole view on every transition, including the one made
    /// by the request task when the response arrives.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionView> {
        self.view.subscribe()
    }

    pub fn view(&self) -> SubmissionView {
        self.view.borrow().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.view.borrow().status.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.view.borrow().status.is_loading()
    }

    /// The failure text; `None` unless the status is `Error`.
    pub fn error_message(&self) -> Option<String> {
        self.view.borrow().error.clone()
    }

    /// Empty until a submission succeeds, and again once the next one starts.
    pub fn generated_code(&self) -> String {
        self.view.borrow().code.clone()
    }

    pub fn locators(&self) -> Vec<ExtractedLocator> {
        self.view.borrow().locators.clone()
    }

    /// Number of submissions started so far.
    pub fn attempts(&self) -> u64 {
        self.attempt
    }

    /// Copy the generated code verbatim.
    pub fn copy_code(&self, clipboard: &mut impl Clipboard) {
        let code = self.generated_code();
        clipboard.write_text(&code);
    }

    // ---- Lifecycle ----

    /// Start a submission from the current form contents.
    ///
    /// Returns `false` and changes nothing while a previous request is still
    /// loading. Otherwise clears the previous result, enters `Loading` and
    /// spawns the request on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn submit(&mut self, form: &FormState) -> bool {
        if self.is_loading() {
            tracing::debug!(attempt = self.attempt, "submission already in flight");
            return false;
        }

        self.attempt += 1;
        let attempt = self.attempt;
        let request = form.snapshot();

        self.view.send_replace(SubmissionView::loading());
        tracing::info!(
            attempt,
            language = %request.selected_language,
            tool = %request.selected_tool,
            "submitting generation request"
        );
        self.tracer.record_start(attempt, &request);

        let backend = Arc::clone(&self.backend);
        let view = Arc::clone(&self.view);
        let tracer = Arc::clone(&self.tracer);

        self.in_flight = Some(tokio::spawn(async move {
            // The call runs in its own task so a panicking backend still
            // resolves the submission.
            let call = tokio::spawn(async move { backend.generate(request).await });
            let result = match call.await {
                Ok(result) => result,
                Err(e) => Err(GenerateError::Interrupted(e.to_string())),
            };
            publish_outcome(&view, &tracer, attempt, result);
        }));
        true
    }

    /// Wait until the in-flight request, if any, has published its outcome.
    /// Returns the resulting status.
    pub async fn settle(&mut self) -> SubmissionStatus {
        if let Some(handle) = self.in_flight.take() {
            if let Err(e) = handle.await {
                tracing::error!(attempt = self.attempt, "request task failed: {}", e);
                self.view.send_replace(SubmissionView::failed(
                    GenerateError::Interrupted(e.to_string()).to_string(),
                ));
            }
        }
        self.status()
    }

    pub async fn submit_and_wait(&mut self, form: &FormState) -> SubmissionStatus {
        self.submit(form);
        self.settle().await
    }
}

fn publish_outcome(
    view: &watch::Sender<SubmissionView>,
    tracer: &TraceLogger,
    attempt: u64,
    result: Result<Value, GenerateError>,
) {
    let outcome = match result {
        Ok(body) => {
            let output = normalize(&body);
            tracing::info!(
                attempt,
                code_len = output.artifact.code.len(),
                locators = output.locators.len(),
                "generation succeeded"
            );
            SubmissionView::succeeded(output)
        }
        Err(e) => {
            tracing::warn!(attempt, "generation failed: {}", e);
            SubmissionView::failed(failure_message(&e))
        }
    };

    tracer.record_outcome(attempt, &outcome);
    view.send_replace(outcome);
}

fn failure_message(error: &GenerateError) -> String {
    match error {
        GenerateError::Status { status, body } if body.trim().is_empty() => {
            format!("{} (status {})", GENERIC_FAILURE, status)
        }
        other => other.to_string(),
    }
}
