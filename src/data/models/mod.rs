pub mod chat_models;
pub mod data_models;
pub mod dictionary_models;
pub mod user_models;

pub use chat_models::{ChatRequest, ChatResponse};
pub use data_models::{AppData, Library};
pub use dictionary_models::{AlphabetEntry, VocabularyEntry, decode_entries};
pub use user_models::{UserProfile, UserUpdate};
