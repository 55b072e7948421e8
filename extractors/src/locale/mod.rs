//! French locale helpers shared by the profile and transaction extractors.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

mod amount_parser;
mod date_parser;

pub use amount_parser::{parse_amount, parse_integer};
pub use date_parser::{
    french_month, parse_date_parts, parse_date_token, parse_relative_count, resolve_relative,
    TimeUnit,
};

/// Lowercase `word` and strip its diacritics, so `Décembre`, `decembre` and `DÉCEMBRE`
/// compare equal whether the accents are precomposed or combining.
pub fn fold(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Line endings to `\n` and characters to their composed (NFC) form, so patterns
/// written with `é` also match text pasted as `e` followed by a combining accent.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n").nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold("Décembre"), "decembre");
        assert_eq!(fold("AOÛT"), "aout");
        assert_eq!(fold("Années"), "annees");
        assert_eq!(fold("De\u{301}cembre"), "decembre");
        assert_eq!(fold("FRANÇAIS"), "francais");
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Abonne\u{301}s\r\n"), "Abonnés\n");
        assert_eq!(normalize_text("Évaluations"), "Évaluations");
    }
}
