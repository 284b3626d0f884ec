//! Fixed flag-emoji → target-language table.
//!
//! Loaded once into the binary; read-only for the process lifetime. Extend
//! by adding rows.

use crate::lang::LanguageCode;

const FLAG_LANGUAGES: &[(&str, &str)] = &[
    ("🇫🇷", "fr"),
    ("🇬🇧", "en"),
    ("🇺🇸", "en"),
    ("🇪🇸", "es"),
    ("🇩🇪", "de"),
    ("🇮🇹", "it"),
    ("🇯🇵", "ja"),
    ("🇨🇳", "zh"),
    ("🇰🇷", "ko"),
    ("🇷🇺", "ru"),
    ("🇧🇷", "pt"),
    ("🇵🇹", "pt"),
    ("🇸🇦", "ar"),
    ("🇮🇳", "hi"),
];

/// Look up the target language implied by a flag reaction.
///
/// Returns `None` for any emoji not in the table; the caller treats that as
/// a no-op, not an error.
pub fn language_for_flag(emoji: &str) -> Option<LanguageCode> {
    FLAG_LANGUAGES
        .iter()
        .find(|(flag, _)| *flag == emoji)
        .and_then(|(_, code)| LanguageCode::parse(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_flag_resolves() {
        for (flag, code) in FLAG_LANGUAGES {
            let resolved = language_for_flag(flag);
            assert_eq!(
                resolved.as_ref().map(LanguageCode::as_str),
                Some(*code),
                "flag {flag} should map to {code}"
            );
        }
    }

    #[test]
    fn test_japanese_flag() {
        assert_eq!(language_for_flag("🇯🇵").unwrap().as_str(), "ja");
    }

    #[test]
    fn test_both_portuguese_flags() {
        assert_eq!(language_for_flag("🇧🇷").unwrap().as_str(), "pt");
        assert_eq!(language_for_flag("🇵🇹").unwrap().as_str(), "pt");
    }

    #[test]
    fn test_unknown_emoji_is_none() {
        assert!(language_for_flag("👍").is_none());
        assert!(language_for_flag("🏳️").is_none());
        assert!(language_for_flag("").is_none());
    }
}
