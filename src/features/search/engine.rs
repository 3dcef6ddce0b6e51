use crate::data::JsonStore;
use crate::data::models::{AlphabetEntry, VocabularyEntry, decode_entries};
use crate::data::store::{ALPHABETS, VOCABULARY};

const CONTEXT_HEADER: &str = "THÔNG TIN TỪ ĐIỂN TÌM THẤY (HÃY DÙNG THÔNG TIN NÀY ĐỂ TRẢ LỜI):";

pub struct SearchEngine;

impl SearchEngine {
    /// Reads the dictionary from disk and builds the context block for `query`.
    pub fn context_for(store: &JsonStore, query: &str) -> String {
        let vocabulary: Vec<VocabularyEntry> = decode_entries(&store.read(VOCABULARY));
        let alphabet: Vec<AlphabetEntry> = decode_entries(&store.read(ALPHABETS));
        SearchEngine::build_context(query, &vocabulary, &alphabet)
    }

    /// Lists every dictionary entry mentioned in `query`, or returns "".
    ///
    /// A word matches when its Jrai or Vietnamese form appears *inside* the
    /// query, so an entry with an empty or one-letter field matches nearly
    /// anything. Letters match on "chữ x" or "âm x". Case-insensitive, no
    /// accent folding, list order kept, no deduplication.
    pub fn build_context(
        query: &str,
        vocabulary: &[VocabularyEntry],
        alphabet: &[AlphabetEntry],
    ) -> String {
        let query = query.to_lowercase();
        let mut found = Vec::new();

        for entry in vocabulary {
            let jrai = entry.jrai.to_lowercase();
            let viet = entry.viet.to_lowercase();
            if query.contains(&jrai) || query.contains(&viet) {
                found.push(format!(
                    "- Từ: {} | Nghĩa: {} | Loại: {} | Ví dụ: {}",
                    entry.jrai, entry.viet, entry.word_type, entry.example
                ));
            }
        }

        for entry in alphabet {
            let character = entry.character.to_lowercase();
            if query.contains(&format!("chữ {}", character))
                || query.contains(&format!("âm {}", character))
            {
                found.push(format!(
                    "- Chữ cái: {} | Phát âm: {} | Ví dụ: {}",
                    entry.character, entry.pronounce, entry.example
                ));
            }
        }

        if found.is_empty() {
            return String::new();
        }
        format!("{}\n{}", CONTEXT_HEADER, found.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(jrai: &str, viet: &str) -> VocabularyEntry {
        VocabularyEntry {
            jrai: jrai.into(),
            viet: viet.into(),
            word_type: "greeting".into(),
            example: "Kơkuh kơ ih".into(),
        }
    }

    fn letter(character: &str) -> AlphabetEntry {
        AlphabetEntry {
            character: character.into(),
            pronounce: "ơ".into(),
            example: "Ơi".into(),
        }
    }

    #[test]
    fn entry_with_null_example_still_reaches_context() {
        let doc = serde_json::json!([
            { "jrai": "Kơkuh", "viet": "chào", "type": "greeting", "example": null }
        ]);
        let vocabulary: Vec<VocabularyEntry> = decode_entries(&doc);
        let context = SearchEngine::build_context("cho tôi hỏi chào", &vocabulary, &[]);
        assert!(context.contains("- Từ: Kơkuh | Nghĩa: chào | Loại: greeting | Ví dụ: "));
    }

    #[test]
    fn no_dictionary_term_in_query_gives_empty_context() {
        let vocabulary = vec![word("Kơkuh", "kính chào"), word("Ama", "cha")];
        let context = SearchEngine::build_context("xin chào bạn", &vocabulary, &[]);
        assert_eq!(context, "");
    }

    #[test]
    fn vietnamese_term_inside_query_matches() {
        let vocabulary = vec![word("Kơkuh", "chào")];
        let context = SearchEngine::build_context("cho tôi hỏi chào", &vocabulary, &[]);
        assert!(context.starts_with(CONTEXT_HEADER));
        assert!(context.contains("- Từ: Kơkuh | Nghĩa: chào | Loại: greeting"));
    }

    #[test]
    fn jrai_term_matches_case_insensitively() {
        let vocabulary = vec![word("Kơkuh", "chào")];
        let context = SearchEngine::build_context("KƠKUH nghĩa là gì", &vocabulary, &[]);
        assert!(context.contains("Kơkuh"));
    }

    #[test]
    fn query_inside_term_does_not_match() {
        let vocabulary = vec![word("Kơkuh", "kính chào")];
        let context = SearchEngine::build_context("kính", &vocabulary, &[]);
        assert_eq!(context, "");
    }

    #[test]
    fn accents_are_not_folded() {
        let vocabulary = vec![word("Kơkuh", "chào")];
        assert_eq!(SearchEngine::build_context("chao ban", &vocabulary, &[]), "");
    }

    #[test]
    fn empty_field_matches_any_query() {
        let vocabulary = vec![word("", "không có")];
        let context = SearchEngine::build_context("hôm nay trời đẹp", &vocabulary, &[]);
        assert!(context.contains("Nghĩa: không có"));
    }

    #[test]
    fn alphabet_matches_on_letter_or_sound_phrase() {
        let alphabet = vec![letter("Ơ"), letter("B")];
        let context = SearchEngine::build_context("Phát âm chữ ơ thế nào?", &[], &alphabet);
        assert!(context.contains("- Chữ cái: Ơ | Phát âm: ơ | Ví dụ: Ơi"));
        assert!(!context.contains("Chữ cái: B"));

        let context = SearchEngine::build_context("âm b", &[], &alphabet);
        assert!(context.contains("Chữ cái: B"));
    }

    #[test]
    fn bare_letter_does_not_match_alphabet() {
        let alphabet = vec![letter("B")];
        assert_eq!(SearchEngine::build_context("b", &[], &alphabet), "");
    }

    #[test]
    fn all_matches_kept_in_order() {
        let vocabulary = vec![word("Ama", "cha"), word("Ama", "cha"), word("Amĭ", "mẹ")];
        let alphabet = vec![letter("A")];
        let context =
            SearchEngine::build_context("cha và mẹ, chữ a", &vocabulary, &alphabet);
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Ama"));
        assert!(lines[2].contains("Ama"));
        assert!(lines[3].contains("Amĭ"));
        assert!(lines[4].starts_with("- Chữ cái: A"));
    }
}
