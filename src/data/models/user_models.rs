use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single profile record kept in `user.json`.
///
/// Kept as the raw object so hand-written keys and values of any type
/// survive a rewrite; only submitted keys are ever replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Public URL of the uploaded picture, e.g. `/static/uploads/me.png`.
    pub fn set_avatar(&mut self, url: String) {
        self.set("avatar", url);
    }
}

/// Text fields submitted to the update form. `None` means "leave as is".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub theme: Option<String>,
}

impl UserUpdate {
    /// Records a submitted form field; returns false for unknown names.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "theme" => &mut self.theme,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    pub fn apply_to(self, profile: &mut UserProfile) {
        let submitted = [
            ("name", self.name),
            ("email", self.email),
            ("phone", self.phone),
            ("theme", self.theme),
        ];
        for (key, value) in submitted {
            if let Some(value) = value {
                profile.set(key, value);
            }
        }
    }
}
