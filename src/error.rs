//! Error types for Boss client operations.

use thiserror::Error;

/// Main error type for calls against a Boss API.
#[derive(Error, Debug)]
pub enum BossError {
    /// Transport-level failure raised by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.  The body is passed
    /// through untranslated.
    #[error("{status} from {url}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    /// No backend registered for the requested API version.
    #[error("unsupported API version: {0}")]
    InvalidVersion(String),

    /// Not a valid `bossdb://collection/experiment/channel` URI.
    #[error("invalid bossdb URI: {0}")]
    InvalidUri(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A response body that could not be turned back into a cutout or
    /// record, e.g. a blosc buffer whose length disagrees with the
    /// requested extents.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Specialized Result type for Boss client operations.
pub type Result<T> = std::result::Result<T, BossError>;

impl From<toml::de::Error> for BossError {
    fn from(err: toml::de::Error) -> Self {
        BossError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BossError {
    fn from(err: serde_json::Error) -> Self {
        BossError::Decode(err.to_string())
    }
}
