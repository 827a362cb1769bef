//! Error types for remote collection fetches.

/// Result type alias using [`FetchError`].
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching from a collection endpoint.
///
/// Every variant is recoverable: the view surfaces it inline and the user
/// triggers a new fetch (page change or refresh) to try again.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Request failed ({status}) for {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Request URL, for the log and the inline message.
        url: String,
    },

    /// The body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Create an HTTP status error.
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        FetchError::Http {
            status,
            url: url.into(),
        }
    }

    /// Get the HTTP status code if this is an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short classification used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Http { .. } => "http",
            FetchError::Decode(_) => "decode",
        }
    }
}
