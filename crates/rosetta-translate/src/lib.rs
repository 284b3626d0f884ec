//! # rosetta-translate
//!
//! Google Cloud Translation v2 backend: service-account credential loading,
//! OAuth2 JWT-bearer token minting, and the `Translator` implementation.

mod auth;
mod credentials;
mod google;

pub use credentials::ServiceAccountKey;
pub use google::GoogleTranslator;
