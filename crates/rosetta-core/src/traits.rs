use crate::error::RosettaError;
use crate::message::{Translation, TranslationRequest};
use async_trait::async_trait;

/// Translation backend — the remote collaborator that does the actual work.
///
/// Implementations make exactly one remote call per request; retries and
/// result caching are deliberately absent. Handlers receive this as an
/// `Arc<dyn Translator>` built once at startup.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate one request.
    async fn translate(&self, request: &TranslationRequest)
        -> Result<Translation, RosettaError>;
}
