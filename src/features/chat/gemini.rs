use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::Config;
use crate::features::chat::provider::{ChatProvider, ProviderError, ProviderRequest};

/// Client for the Generative Language `generateContent` REST endpoint.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, api_base: &str, model: &str) -> Result<Self, ProviderError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                api_base.trim_end_matches('/'),
                model
            ),
        })
    }

    /// Builds a client when a credential is configured. `None` leaves the
    /// chat feature unavailable for the whole process.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        match GeminiClient::new(api_key, &config.api_base, &config.model) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Failed to initialise AI client: {}", e);
                None
            }
        }
    }

    fn request_body(request: &ProviderRequest) -> Value {
        let mut contents = request.history.clone();
        contents.push(json!({
            "role": "user",
            "parts": [{ "text": request.message }]
        }));

        json!({
            "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
            "contents": contents,
            "generationConfig": request.generation,
        })
    }

    fn reply_text(body: &str) -> Result<String, ProviderError> {
        let parsed: GenerateResponse =
            serde_json::from_str(body).map_err(|e| ProviderError::Response(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::Response("reply contained no text".into()));
        }
        Ok(text)
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn send(&self, request: ProviderRequest) -> Result<String, ProviderError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&GeminiClient::request_body(&request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        GeminiClient::reply_text(&body)
    }
}
