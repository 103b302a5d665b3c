use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::Notify;

use test_automation_generator::output::clipboard::Clipboard;
use test_automation_generator::service::backend::GenerationBackend;
use test_automation_generator::service::error::GenerateError;
use test_automation_generator::service::service_model::GenerateRequest;

/// Replies with queued results in order and records every request it sees.
/// A gated backend holds each reply until the gate is notified.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<Value, GenerateError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<Value, GenerateError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated(gate: Arc<Notify>, replies: Vec<Result<Value, GenerateError>>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(replies)
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<Value, GenerateError> {
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Err(GenerateError::Interrupted("no scripted reply".into())))
    }
}

/// Panics instead of answering.
pub struct PanickingBackend;

impl GenerationBackend for PanickingBackend {
    async fn generate(&self, _request: GenerateRequest) -> Result<Value, GenerateError> {
        panic!("backend exploded");
    }
}

/// Yield until the backend has seen `n` requests (or give up after a while).
pub async fn wait_for_requests(backend: &ScriptedBackend, n: usize) {
    for _ in 0..100 {
        if backend.request_count() >= n {
            return;
        }
        tokio::task::yield_now().await;
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

pub fn status_error(status: u16, body: &str) -> GenerateError {
    GenerateError::Status {
        status,
        body: body.to_string(),
    }
}

pub fn malformed_error() -> GenerateError {
    let err = serde_json::from_str::<Value>("<html>oops</html>").unwrap_err();
    GenerateError::MalformedResponse(err)
}
