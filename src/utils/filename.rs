use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

lazy_static! {
    static ref UNSAFE_CHARS_RE: Regex = Regex::new(r"[^A-Za-z0-9_.-]").unwrap();
}

/// Turns a client-supplied file name into one that is safe to join onto a
/// directory: ASCII only, no separators, no leading dots. May return "".
pub fn secure_filename(name: &str) -> String {
    let ascii = unidecode(name).replace(['/', '\\'], " ");
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&joined, "");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directory_components() {
        assert_eq!(secure_filename("../../evil.png"), "evil.png");
        assert_eq!(secure_filename("/etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename(r"..\..\win.ini"), "win.ini");
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(secure_filename("my cool  avatar.jpg"), "my_cool_avatar.jpg");
    }

    #[test]
    fn diacritics_are_transliterated() {
        assert_eq!(secure_filename("ảnh đại diện.png"), "anh_dai_dien.png");
    }

    #[test]
    fn nothing_left_yields_empty() {
        assert_eq!(secure_filename("../.."), "");
        assert_eq!(secure_filename(""), "");
        assert_eq!(secure_filename("***"), "");
    }

    #[test]
    fn hidden_files_lose_their_dot() {
        assert_eq!(secure_filename(".htaccess"), "htaccess");
    }
}
