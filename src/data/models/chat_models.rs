use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `null` and absent fields are both treated as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Prior turns in the provider's own shape, forwarded untouched.
    pub history: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_decode_as_absent() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": null, "history": null}"#).unwrap();
        assert!(request.message.is_none());
        assert!(request.history.is_none());
    }
}
