//! Google Cloud Translation v2 client.
//!
//! One `POST /language/translate/v2` per request, bearer-authenticated.
//! Docs: <https://cloud.google.com/translate/docs/reference/rest/v2/translate>

use crate::auth::TokenProvider;
use crate::credentials::ServiceAccountKey;
use async_trait::async_trait;
use rosetta_core::{
    config::CredentialSource,
    error::RosettaError,
    message::{Translation, TranslationRequest},
    traits::Translator,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Translation backend over the Google Cloud Translation v2 REST API.
pub struct GoogleTranslator {
    client: reqwest::Client,
    tokens: TokenProvider,
    base_url: String,
}

impl GoogleTranslator {
    /// Build from a credential source (inline key JSON or key-file path).
    ///
    /// Credential problems surface here, before any connection is made.
    pub fn from_credentials(source: &CredentialSource) -> Result<Self, RosettaError> {
        let key = ServiceAccountKey::load(source)?;
        let client = reqwest::Client::new();
        Ok(Self {
            tokens: TokenProvider::new(key, client.clone()),
            client,
            base_url: TRANSLATE_URL.to_string(),
        })
    }
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    /// Always `text`, so the service does not HTML-escape the result.
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
}

#[derive(Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<TranslatedItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedItem {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google-translate-v2"
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, RosettaError> {
        let token = self.tokens.access_token().await?;
        let body = TranslateBody {
            q: &request.text,
            target: request.target.as_str(),
            format: "text",
        };

        debug!(
            "translate {}: {} chars -> {}",
            request.id,
            request.text.chars().count(),
            request.target
        );

        let resp = self
            .client
            .post(&self.base_url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| RosettaError::Translation(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RosettaError::Translation(format!(
                "service returned {status}: {body}"
            )));
        }

        let parsed: TranslateResponse = resp
            .json()
            .await
            .map_err(|e| RosettaError::Translation(format!("failed to parse response: {e}")))?;

        parsed
            .data
            .and_then(|data| data.translations.into_iter().next())
            .map(|item| Translation {
                text: item.translated_text,
                detected_source: item.detected_source_language,
            })
            .ok_or_else(|| RosettaError::Translation("empty response from service".to_string()))
    }
}
