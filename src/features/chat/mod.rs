pub mod bridge;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod provider;

pub use bridge::ChatBridge;
pub use error::ChatError;
pub use gemini::GeminiClient;
pub use provider::{ChatProvider, GenerationConfig, ProviderError, ProviderRequest};
