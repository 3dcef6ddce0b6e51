use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::data::models::{ChatRequest, ChatResponse};
use crate::features::chat::ChatError;
use crate::state::AppState;

/// Checks the provider before looking at the body, so an unconfigured
/// server answers every request the same way.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    if !state.chat.is_available() {
        return Err(ChatError::Unavailable);
    }

    let payload: ChatRequest = serde_json::from_slice(&body)?;
    let message = payload.message.unwrap_or_default();
    let history = payload.history.unwrap_or_default();

    let response = state.chat.reply(&state.store, &message, history).await?;
    Ok(Json(ChatResponse { response }))
}
