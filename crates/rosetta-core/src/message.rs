//! Request/response types for a single translation exchange.
//!
//! Both are request-scoped: built per event, dropped once the notification
//! is out. Nothing is persisted or shared between events.

use crate::lang::LanguageCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One translation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Correlation id for log lines; never shown to users.
    pub id: Uuid,
    /// Text to translate. Non-empty; reaction-triggered requests are capped
    /// by the handler before one of these is built.
    pub text: String,
    pub target: LanguageCode,
    /// Display name of whoever asked, for logging.
    pub requester: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        target: LanguageCode,
        requester: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            target,
            requester: requester.into(),
        }
    }
}

/// Result of a translation call. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// The translated text.
    pub text: String,
    /// Source language the service inferred, when it reports one. Usually a
    /// two-letter code, sometimes a regional form like `zh-CN`.
    pub detected_source: Option<String>,
}
