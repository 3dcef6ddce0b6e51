use std::path::PathBuf;

use crate::data::JsonStore;
use crate::features::chat::ChatBridge;

/// Dependencies handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    pub chat: ChatBridge,
    pub upload_dir: PathBuf,
}
