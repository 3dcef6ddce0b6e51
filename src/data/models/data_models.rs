use serde::Serialize;
use serde_json::Value;

/// Everything the single-page client needs, in one payload.
#[derive(Debug, Serialize)]
pub struct AppData {
    pub alphabet: Value,
    pub dictionary: Value,
    pub lessons: Value,
    pub user: Value,
    pub library: Library,
}

#[derive(Debug, Serialize)]
pub struct Library {
    pub text: Value,
    pub audio: Value,
}
