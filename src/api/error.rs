use thiserror::Error;

/// Why a search request failed.
///
/// The variants only matter for logs; the story list reacts to all of
/// them the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("API returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Client(_) => "client",
            FetchError::Network(_) => "network",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
