//! The outbound notification model.
//!
//! Platform-neutral: which fields appear and how they are labelled is
//! decided here; the Discord crate only renders the result into an embed.

use crate::lang::LanguageCode;

/// Fixed notification title.
pub const TITLE: &str = "🌍 Translation";

/// Fixed attribution footer.
pub const FOOTER: &str = "Powered by Google Cloud Translation";

/// Field name for the verbatim input text.
pub const ORIGINAL_LABEL: &str = "Original Text";

/// Who asked for the translation, as shown in the notification header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// One translation result, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationNotice {
    pub target: LanguageCode,
    pub original_text: String,
    pub translated_text: String,
    /// Source language reported by the service, if any.
    pub detected_source: Option<String>,
    pub requester: Requester,
}

impl TranslationNotice {
    /// Description line naming the target language.
    pub fn description(&self) -> String {
        format!("**Target Language:** `{}`", self.target.display_upper())
    }

    /// Label for the translated-text field.
    ///
    /// Names the detected source when the service reported one that differs
    /// (case-insensitively) from the target; plain otherwise. Never both.
    pub fn translated_label(&self) -> String {
        match &self.detected_source {
            Some(source) if !source.eq_ignore_ascii_case(self.target.as_str()) => {
                format!("Translated from `{}`", source.to_uppercase())
            }
            _ => "Translated Text".to_string(),
        }
    }

    /// Header line crediting the requester.
    pub fn author_line(&self) -> String {
        format!("Requested by {}", self.requester.display_name)
    }
}

/// Wrap text in a code block so the platform renders it verbatim instead of
/// interpreting it as markup.
pub fn code_block(text: &str) -> String {
    format!("```\n{text}\n```")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(detected: Option<&str>) -> TranslationNotice {
        TranslationNotice {
            target: LanguageCode::parse("fr").unwrap(),
            original_text: "hello".to_string(),
            translated_text: "bonjour".to_string(),
            detected_source: detected.map(str::to_string),
            requester: Requester {
                display_name: "alice".to_string(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn test_detected_source_named_when_different() {
        assert_eq!(
            notice(Some("en")).translated_label(),
            "Translated from `EN`"
        );
    }

    #[test]
    fn test_plain_label_when_detected_matches_target() {
        assert_eq!(notice(Some("fr")).translated_label(), "Translated Text");
        // Comparison ignores case: the service sometimes reports upper-case.
        assert_eq!(notice(Some("FR")).translated_label(), "Translated Text");
    }

    #[test]
    fn test_plain_label_when_nothing_detected() {
        assert_eq!(notice(None).translated_label(), "Translated Text");
    }

    #[test]
    fn test_regional_detected_code_shown_in_full() {
        assert_eq!(
            notice(Some("zh-CN")).translated_label(),
            "Translated from `ZH-CN`"
        );
    }

    #[test]
    fn test_description_uppercases_target() {
        assert_eq!(notice(None).description(), "**Target Language:** `FR`");
    }

    #[test]
    fn test_author_line() {
        assert_eq!(notice(None).author_line(), "Requested by alice");
    }

    #[test]
    fn test_code_block_wraps_verbatim() {
        assert_eq!(code_block("*hi*"), "```\n*hi*\n```");
    }

    #[test]
    fn test_same_input_formats_identically() {
        let a = notice(Some("en"));
        let b = notice(Some("en"));
        assert_eq!(a.description(), b.description());
        assert_eq!(a.translated_label(), b.translated_label());
        assert_eq!(a, b);
    }
}
