use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Extension},
    routing::{get, get_service, post},
};
use tera::Tera;
use tower_http::services::ServeDir;

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod state;
pub mod utils;

pub use config::Config;
pub use state::AppState;

/// Creates the data and upload directories if they are missing.
pub fn prepare_dirs(config: &Config) {
    for dir in [config.data_dir.clone(), config.upload_dir()] {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            log::error!("Failed to create {}: {}", dir.display(), e);
        }
    }
}

pub fn app(state: AppState, templates: Arc<Tera>, static_dir: &Path) -> Router {
    let api_router = Router::new()
        .route("/data", get(handlers::data::all_data))
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/user/update",
            post(handlers::user::update_user).layer(DefaultBodyLimit::disable()),
        );

    Router::new()
        .route("/", get(handlers::pages::index))
        .nest("/api", api_router)
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .layer(Extension(templates))
        .with_state(state)
}
