use super::types::GenerateContentRequest;
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Sends a prompt upstream and returns the provider's JSON body.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<Value>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            // Redirects are not followed; a 3xx goes through the same JSON and status checks.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<Value> {
        let payload = GenerateContentRequest::from_prompt(prompt);

        debug!("Sending generateContent request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(Error::from_transport)?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            debug!("Upstream body is not JSON: {}", e);
            Error::UpstreamMalformed {
                status: status.as_u16(),
            }
        })?;

        if status.is_client_error() || status.is_server_error() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Received generateContent response with status {}", status);

        Ok(body)
    }
}
