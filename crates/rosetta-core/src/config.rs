//! Environment-backed configuration.
//!
//! Everything comes from the process environment. Validation happens once,
//! before anything connects, and returns `Result` so the binary can exit
//! with a distinct code instead of failing mid-startup.

use crate::error::RosettaError;
use tracing::warn;

/// Discord bot token (required).
pub const ENV_DISCORD_TOKEN: &str = "DISCORD_BOT_TOKEN";
/// Google service-account key passed inline as JSON.
pub const ENV_CREDENTIALS_JSON: &str = "GOOGLE_APPLICATION_CREDENTIALS_JSON";
/// Path to a Google service-account key file.
pub const ENV_CREDENTIALS_PATH: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// Optional single-character command prefix override.
pub const ENV_COMMAND_PREFIX: &str = "ROSETTA_COMMAND_PREFIX";

const DEFAULT_COMMAND_PREFIX: char = '!';

/// Where the Google service-account key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// The key JSON itself, passed inline.
    Inline(String),
    /// Path to a key file, read once at startup.
    Path(String),
}

/// Validated startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub credentials: CredentialSource,
    pub command_prefix: char,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, RosettaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary lookup function. Tests inject maps here.
    pub fn from_lookup(
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, RosettaError> {
        let discord_token = get(ENV_DISCORD_TOKEN)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                RosettaError::Config(format!(
                    "{ENV_DISCORD_TOKEN} is not set. Export your Discord bot token \
                     before starting, e.g. export {ENV_DISCORD_TOKEN}='...'"
                ))
            })?;

        let inline = get(ENV_CREDENTIALS_JSON).filter(|v| !v.trim().is_empty());
        let path = get(ENV_CREDENTIALS_PATH).filter(|v| !v.trim().is_empty());
        let credentials = match (inline, path) {
            (Some(json), Some(_)) => {
                warn!("both credential variables set; using {ENV_CREDENTIALS_JSON}");
                CredentialSource::Inline(json)
            }
            (Some(json), None) => CredentialSource::Inline(json),
            (None, Some(path)) => CredentialSource::Path(path),
            (None, None) => {
                return Err(RosettaError::Config(format!(
                    "no Google credentials found. Set {ENV_CREDENTIALS_JSON} \
                     (inline key JSON) or {ENV_CREDENTIALS_PATH} (path to the key file)"
                )));
            }
        };

        let command_prefix = match get(ENV_COMMAND_PREFIX) {
            None => DEFAULT_COMMAND_PREFIX,
            Some(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(prefix), None) => prefix,
                    _ => {
                        return Err(RosettaError::Config(format!(
                            "{ENV_COMMAND_PREFIX} must be a single character, got {value:?}"
                        )));
                    }
                }
            }
        };

        Ok(Self {
            discord_token,
            credentials,
            command_prefix,
        })
    }

    /// The full command invocation, e.g. `!translate`.
    pub fn command_invocation(&self) -> String {
        format!("{}translate", self.command_prefix)
    }
}
