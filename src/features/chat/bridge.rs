use std::sync::Arc;

use crate::data::JsonStore;
use crate::features::chat::error::ChatError;
use crate::features::chat::prompt::{self, SYSTEM_INSTRUCTION};
use crate::features::chat::provider::{ChatProvider, GenerationConfig, ProviderRequest};
use crate::features::search::SearchEngine;

/// Answers chat turns, grounding them in the local dictionary first.
#[derive(Clone)]
pub struct ChatBridge {
    provider: Option<Arc<dyn ChatProvider>>,
    generation: GenerationConfig,
}

impl ChatBridge {
    pub fn new(provider: Option<Arc<dyn ChatProvider>>) -> Self {
        Self {
            provider,
            generation: GenerationConfig::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn reply(
        &self,
        store: &JsonStore,
        message: &str,
        history: Vec<serde_json::Value>,
    ) -> Result<String, ChatError> {
        let provider = self.provider.as_ref().ok_or(ChatError::Unavailable)?;

        let context = SearchEngine::context_for(store, message);
        let request = ProviderRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            history,
            message: prompt::compose(&context, message),
            generation: self.generation,
        };

        provider.send(request).await.map_err(|e| {
            log::error!("AI request failed: {}", e);
            ChatError::Provider(e)
        })
    }
}
