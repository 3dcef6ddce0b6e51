use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One dictionary word as stored in `vocabulary.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyEntry {
    #[serde(deserialize_with = "lenient_text")]
    pub jrai: String,
    #[serde(deserialize_with = "lenient_text")]
    pub viet: String,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub word_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub example: String,
}

/// One letter of the Jrai alphabet as stored in `alphabets.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetEntry {
    #[serde(rename = "char", deserialize_with = "lenient_text")]
    pub character: String,
    #[serde(deserialize_with = "lenient_text")]
    pub pronounce: String,
    #[serde(deserialize_with = "lenient_text")]
    pub example: String,
}

/// Hand-edited files hold `null`s and numbers where text is expected.
/// `null` reads as "", anything else that is not a string as its JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Decodes a stored collection element by element.
///
/// Elements that are not objects, or whose fields have the wrong shape, are
/// skipped. A document that is not a list yields nothing.
pub fn decode_entries<T: DeserializeOwned>(document: &Value) -> Vec<T> {
    let Some(items) = document.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| match T::deserialize(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping malformed dictionary entry {}: {}", item, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_empty() {
        let doc = json!([{ "jrai": "Kơkuh", "viet": "chào" }]);
        let entries: Vec<VocabularyEntry> = decode_entries(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word_type, "");
        assert_eq!(entries[0].example, "");
    }

    #[test]
    fn null_and_numeric_fields_become_text() {
        let doc = json!([
            { "jrai": "Kơkuh", "viet": "chào", "type": "greeting", "example": null },
            { "jrai": "Sa", "viet": "một", "type": 1 }
        ]);
        let entries: Vec<VocabularyEntry> = decode_entries(&doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].example, "");
        assert_eq!(entries[1].word_type, "1");

        let letters: Vec<AlphabetEntry> =
            decode_entries(&json!([{ "char": "A", "pronounce": null, "example": ["Ama"] }]));
        assert_eq!(letters[0].pronounce, "");
        assert_eq!(letters[0].example, r#"["Ama"]"#);
    }

    #[test]
    fn non_objects_are_skipped() {
        let doc = json!([1, "a", null, { "char": "A", "pronounce": "a", "example": "Ama" }]);
        let entries: Vec<AlphabetEntry> = decode_entries(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].character, "A");
    }

    #[test]
    fn non_list_document_is_empty() {
        let entries: Vec<VocabularyEntry> = decode_entries(&json!({ "jrai": "x" }));
        assert!(entries.is_empty());
    }
}
