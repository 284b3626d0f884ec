//! Language codes and the fixed default target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target language used when a command does not name one.
pub const DEFAULT_TARGET: &str = "en";

/// A two-letter lowercase language code.
///
/// Any two alphabetic characters are accepted; codes are not checked
/// against an ISO list. An unknown code like `xx` is passed through to the
/// translation service, whose rejection surfaces as a translation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse a token as a language code: exactly two alphabetic characters,
    /// lower-cased. Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if a.is_alphabetic() && b.is_alphabetic() => {
                Some(Self(token.to_lowercase()))
            }
            _ => None,
        }
    }

    /// The fixed default target (`en`).
    pub fn default_target() -> Self {
        Self(DEFAULT_TARGET.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form for display in notifications.
    pub fn display_upper(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
