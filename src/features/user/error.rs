use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserUpdateError {
    #[error("Invalid form data: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Invalid form data: {0}")]
    MultipartRejection(#[from] MultipartRejection),
    #[error("Invalid form data: {0}")]
    Form(#[from] FormRejection),
    #[error("Could not save avatar")]
    Upload(#[from] std::io::Error),
}

impl IntoResponse for UserUpdateError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserUpdateError::Multipart(_)
            | UserUpdateError::MultipartRejection(_)
            | UserUpdateError::Form(_) => StatusCode::BAD_REQUEST,
            UserUpdateError::Upload(e) => {
                log::error!("Avatar upload failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
