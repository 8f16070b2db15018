use thiserror::Error;

/// Errors returned by the Yelp Fusion API client.
#[derive(Debug, Error)]
pub enum YelpError {
    /// No API key configured. Raised before any network call is attempted.
    #[error("no Yelp API credential configured (set YELP_API_KEY)")]
    MissingCredential,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. The code is preserved so
    /// callers can tell an authorization failure from a transient one.
    #[error("Yelp API returned HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed or joined.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl YelpError {
    /// The upstream HTTP status code, when this error carries one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            YelpError::Status { code, .. } => Some(*code),
            YelpError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
