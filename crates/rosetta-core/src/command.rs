//! Argument parsing for the `translate` command.

use crate::lang::LanguageCode;
use thiserror::Error;

/// Errors a user can trigger with malformed command input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing left to translate after parsing.
    #[error("no text supplied")]
    MissingText,
}

/// Parsed `translate` arguments: where to translate to, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    pub target: LanguageCode,
    pub text: String,
}

/// Parse the free-form argument string following `<prefix>translate`.
///
/// The first whitespace-separated token is taken as the target language when
/// it is exactly two alphabetic characters; otherwise every token belongs to
/// the text and the default target applies. Tokens are re-joined with single
/// spaces. No quoting or escaping.
pub fn parse_translate_args(raw: &str) -> Result<TranslateArgs, CommandError> {
    let mut tokens = raw.split_whitespace();
    let first = tokens.next().ok_or(CommandError::MissingText)?;

    let (target, text) = match LanguageCode::parse(first) {
        Some(code) => (code, tokens.collect::<Vec<_>>().join(" ")),
        None => {
            let mut all = vec![first];
            all.extend(tokens);
            (LanguageCode::default_target(), all.join(" "))
        }
    };

    if text.is_empty() {
        return Err(CommandError::MissingText);
    }

    Ok(TranslateArgs { target, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_code_selects_target() {
        let args = parse_translate_args("fr bonjour le monde").unwrap();
        assert_eq!(args.target.as_str(), "fr");
        assert_eq!(args.text, "bonjour le monde");
    }

    #[test]
    fn test_leading_code_is_lowercased() {
        let args = parse_translate_args("JA good morning").unwrap();
        assert_eq!(args.target.as_str(), "ja");
        assert_eq!(args.text, "good morning");
    }

    #[test]
    fn test_no_code_defaults_to_english() {
        let args = parse_translate_args("bonjour le monde").unwrap();
        assert_eq!(args.target.as_str(), "en");
        assert_eq!(args.text, "bonjour le monde");
    }

    #[test]
    fn test_three_letter_first_token_is_text() {
        let args = parse_translate_args("fra bonjour").unwrap();
        assert_eq!(args.target.as_str(), "en");
        assert_eq!(args.text, "fra bonjour");
    }

    #[test]
    fn test_numeric_first_token_is_text() {
        let args = parse_translate_args("42 is the answer").unwrap();
        assert_eq!(args.target.as_str(), "en");
        assert_eq!(args.text, "42 is the answer");
    }

    #[test]
    fn test_tokens_rejoined_with_single_spaces() {
        let args = parse_translate_args("de   hello    world").unwrap();
        assert_eq!(args.text, "hello world");
    }

    #[test]
    fn test_empty_input_is_missing_text() {
        assert_eq!(parse_translate_args(""), Err(CommandError::MissingText));
        assert_eq!(parse_translate_args("   "), Err(CommandError::MissingText));
    }

    #[test]
    fn test_lone_language_code_is_missing_text() {
        assert_eq!(parse_translate_args("fr"), Err(CommandError::MissingText));
        assert_eq!(parse_translate_args("  fr  "), Err(CommandError::MissingText));
    }

    #[test]
    fn test_unvalidated_code_is_accepted() {
        let args = parse_translate_args("xx hello").unwrap();
        assert_eq!(args.target.as_str(), "xx");
        assert_eq!(args.text, "hello");
    }
}
