use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::features::chat::provider::ProviderError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("AI Error")]
    Unavailable,
    #[error("Invalid JSON body")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Lỗi kết nối AI")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = match self {
            ChatError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ChatError::Unavailable | ChatError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Display never includes the underlying cause.
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
