use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::service::service_model::GenerateRequest;
use crate::submission::submission_model::SubmissionView;
use crate::trace::trace::SubmissionTraceEvent;

/// JSONL record of every submission, shared between the controller and its
/// in-flight request task. A logger without a file records nothing.
pub struct TraceLogger {
    sink: Option<Mutex<LineWriter<File>>>,
}

impl TraceLogger {
    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Some(Mutex::new(LineWriter::new(file))),
        })
    }

    /// Like `open`, but a file that cannot be opened only costs a warning.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::open(path).unwrap_or_else(|e| {
            tracing::warn!("submission trace disabled, cannot open '{}': {}", path.display(), e);
            Self::disabled()
        })
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record_start(&self, attempt: u64, request: &GenerateRequest) {
        self.write(&SubmissionTraceEvent::started(attempt, request));
    }

    pub fn record_outcome(&self, attempt: u64, view: &SubmissionView) {
        self.write(&SubmissionTraceEvent::resolved(attempt, view));
    }

    fn write(&self, event: &SubmissionTraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let result = serde_json::to_string(event)
            .map_err(io::Error::from)
            .and_then(|line| match sink.lock() {
                Ok(mut writer) => writeln!(writer, "{}", line),
                Err(_) => Err(io::Error::other("trace writer poisoned")),
            });

        if let Err(e) = result {
            tracing::warn!(attempt = event.attempt, "failed to record submission trace: {}", e);
        }
    }
}
