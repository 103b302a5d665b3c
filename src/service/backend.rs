use std::future::Future;

use serde_json::Value;

use crate::service::error::GenerateError;
use crate::service::service_model::{GenerateRequest, HealthStatus, ServiceConfig};

// ============================================================================
// GenerationBackend trait — the single network seam
// ============================================================================

/// Something that turns a request payload into a raw response body.
///
/// Implementations report transport and parse failures as `GenerateError`;
/// interpreting the body is left to the caller.
pub trait GenerationBackend: Send + Sync + 'static {
    fn generate(
        &self,
        request: GenerateRequest,
    ) -> impl Future<Output = Result<Value, GenerateError>> + Send;
}

// ============================================================================
// HTTP backend
// ============================================================================

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: &ServiceConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Query `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, GenerateError> {
        let url = self.endpoint("/health");
        tracing::debug!(%url, "checking service health");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl GenerationBackend for HttpBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<Value, GenerateError> {
        let url = self.endpoint("/generate");
        tracing::debug!(
            %url,
            language = %request.selected_language,
            tool = %request.selected_tool,
            "posting generation request"
        );

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generation service returned an error");
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(bytes = body.len(), "generation response received");
        Ok(serde_json::from_str(&body)?)
    }
}
