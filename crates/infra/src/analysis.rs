// crates/infra/src/analysis.rs
//! Local LLM summarizer speaking Ollama's `/api/generate` protocol.

use std::time::Duration;

use log::debug;
use project_radar_ports::analysis::Summarizer;
use project_radar_shared_kernel::{InfraResult, InfrastructureError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Ollama generate request body
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama generate response; only the generated text is read
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Summarizer backed by a local Ollama server.
pub struct OllamaSummarizer {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaSummarizer {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> InfraResult<Self> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InfrastructureError::Http { endpoint: endpoint.clone(), details: e.to_string() })?;
        Ok(Self { client, endpoint, model: model.into() })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Summarizer for OllamaSummarizer {
    fn summarize(&self, prompt: &str) -> InfraResult<String> {
        debug!("sending {} prompt chars to {} ({})", prompt.chars().count(), self.endpoint, self.model);
        let request = GenerateRequest { model: &self.model, prompt, stream: false };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| InfrastructureError::Http { endpoint: self.endpoint.clone(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::UnexpectedResponse {
                endpoint: self.endpoint.clone(),
                details: format!("HTTP {status}"),
            });
        }

        let body: GenerateResponse = response.json().map_err(|e| InfrastructureError::UnexpectedResponse {
            endpoint: self.endpoint.clone(),
            details: e.to_string(),
        })?;
        Ok(body.response)
    }
}
