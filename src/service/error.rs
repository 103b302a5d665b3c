use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a
/// parsed response body.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The service answered with a non-2xx status
    #[error("Server error: {status} {body}")]
    Status { status: u16, body: String },

    /// The request never got a response (connection refused, reset, DNS...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body is not JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The in-flight request task panicked or was aborted
    #[error("Request did not complete: {0}")]
    Interrupted(String),
}

impl GenerateError {
    /// Network failures and error statuses; everything the service itself
    /// could be blamed for in transit.
    pub fn is_transport(&self) -> bool {
        matches!(self, GenerateError::Status { .. } | GenerateError::Network(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            GenerateError::Status { status, .. } => Some(*status),
            GenerateError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
