use std::sync::Arc;

use anyhow::Context as _;
use jrai_dictionary::{
    AppState, Config, app,
    data::JsonStore,
    features::chat::{ChatBridge, ChatProvider, GeminiClient},
    prepare_dirs,
};
use tera::Tera;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    prepare_dirs(&config);

    // Templates configuration
    let templates_glob = config.templates_dir.join("**").join("*.html");
    let templates = Tera::new(&templates_glob.to_string_lossy())
        .with_context(|| format!("Template parsing error in {}", config.templates_dir.display()))?;

    let provider = GeminiClient::from_config(&config).map(|c| Arc::new(c) as Arc<dyn ChatProvider>);
    let chat = ChatBridge::new(provider);
    if chat.is_available() {
        log::info!("AI chat enabled with model {}", config.model);
    } else {
        log::warn!("GEMINI_API_KEY not set, /api/chat will answer with an error");
    }

    let state = AppState {
        store: JsonStore::new(config.data_dir.clone()),
        chat,
        upload_dir: config.upload_dir(),
    };
    let router = app(state, Arc::new(templates), &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!(
        "Server running on http://{} (data in {})",
        config.bind_addr,
        config.data_dir.display()
    );

    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}
