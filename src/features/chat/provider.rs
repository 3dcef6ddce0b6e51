use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Sampling parameters, fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.95,
            max_output_tokens: 8192,
        }
    }
}

/// One chat turn as handed to a provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub system_instruction: String,
    pub history: Vec<Value>,
    pub message: String,
    pub generation: GenerationConfig,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Response(String),
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn send(&self, request: ProviderRequest) -> Result<String, ProviderError>;
}
