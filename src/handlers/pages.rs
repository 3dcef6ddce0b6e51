use axum::extract::Extension;
use axum::response::IntoResponse;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::utils::render_template;

pub async fn index(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "index.html", Context::new())
}
