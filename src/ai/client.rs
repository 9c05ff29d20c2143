use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use super::config::LlmConfig;

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    #[serde(rename = "num_predict")]
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 500,
        }
    }
}

/// A text completion backend.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str, sampling: &SamplingParams) -> Result<String>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a SamplingParams,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for a local Ollama server.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the server answers at all.
    #[instrument(level = "debug", skip(self))]
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/api/tags", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(anyhow!("Ollama health check returned {}", resp.status()));
        }
        debug!(url, "model server reachable");
        Ok(())
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    #[instrument(level = "trace", skip(self, prompt))]
    async fn complete(&self, prompt: &str, sampling: &SamplingParams) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(url, model = %self.model, "sending generate request");

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: sampling,
        };
        let resp = self.http.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err_text = resp.text().await.unwrap_or_default();
            warn!(%status, "Ollama API error");
            return Err(anyhow!("Ollama API error {status}: {err_text}"));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "generate response");
        let data: GenerateResponse = serde_json::from_str(&raw)?;
        Ok(data.response)
    }
}
