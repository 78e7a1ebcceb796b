use thiserror::Error;

/// Error type for SwitchBot API calls.
///
/// Transport, status, and decode failures stay separate variants so callers
/// can map each to a different response at their own boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Device id {0} does not exist")]
    DeviceNotFound(String),
}

/// Result type alias using the SwitchBot API Error.
pub type Result<T> = std::result::Result<T, Error>;
