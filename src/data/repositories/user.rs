use serde_json::Value;

use crate::data::models::UserProfile;
use crate::data::store::{JsonStore, Loaded, USER};

pub struct UserRepository;

impl UserRepository {
    /// Reads the stored profile. Anything that is not a JSON object
    /// (missing file, the `[]` default, bad JSON) starts a fresh record.
    pub fn load(store: &JsonStore) -> UserProfile {
        match store.load(USER) {
            Loaded::Found(Value::Object(fields)) => UserProfile::from_map(fields),
            Loaded::Found(other) => {
                log::warn!("Stored user record is not an object: {}", other);
                UserProfile::default()
            }
            Loaded::Missing | Loaded::Corrupt(_) => UserProfile::default(),
        }
    }

    /// Rewrites the profile. Failure is logged and otherwise ignored.
    pub fn save(store: &JsonStore, profile: &UserProfile) {
        if let Err(e) = store.save(USER, profile) {
            log::error!("Failed to persist user record: {}", e);
        }
    }

    pub fn avatar_url(file_name: &str) -> String {
        format!("/static/uploads/{}", file_name)
    }
}
