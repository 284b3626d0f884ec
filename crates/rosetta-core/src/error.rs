use thiserror::Error;

/// Top-level error type for Rosetta.
#[derive(Debug, Error)]
pub enum RosettaError {
    /// Missing or invalid startup configuration. Fatal before the event
    /// loop starts; never produced afterwards.
    #[error("config error: {0}")]
    Config(String),

    /// Any failure in the translation call chain (token minting, transport,
    /// HTTP status, decoding). Recovered per event.
    #[error("translation error: {0}")]
    Translation(String),

    /// Error from the Discord side.
    #[error("channel error: {0}")]
    Channel(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
