use axum::Json;
use axum::extract::State;

use crate::data::models::{AppData, Library};
use crate::data::store::{ALPHABETS, LESSONS, LIBRARY_AUDIO, LIBRARY_TEXT, USER, VOCABULARY};
use crate::state::AppState;

/// Every document, read fresh from disk.
pub async fn all_data(State(state): State<AppState>) -> Json<AppData> {
    let store = &state.store;
    Json(AppData {
        alphabet: store.read(ALPHABETS),
        dictionary: store.read(VOCABULARY),
        lessons: store.read(LESSONS),
        user: store.read(USER),
        library: Library {
            text: store.read(LIBRARY_TEXT),
            audio: store.read(LIBRARY_AUDIO),
        },
    })
}
