use thiserror::Error;

use tablescout_yelp::{MissingLocation, YelpError};

/// Errors surfaced by [`find_dinner`](crate::pipeline::find_dinner).
///
/// Enrichment (review lookup) failures are deliberately absent: they are
/// recovered locally to a missing snippet and never abort the pipeline.
#[derive(Debug, Error)]
pub enum FindError {
    /// The query carried no usable location. Raised before any network call.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No API credential configured. Raised before any network call.
    #[error("no API credential configured (set YELP_API_KEY)")]
    MissingCredential,

    /// The search call failed; no partial ranked list is returned.
    #[error("search failed: {0}")]
    SourceUnavailable(#[source] YelpError),
}

impl FindError {
    /// The upstream HTTP status code, when the search failure carries one.
    /// Lets callers tell an authorization failure from a transient one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FindError::SourceUnavailable(e) => e.status_code(),
            _ => None,
        }
    }
}

impl From<MissingLocation> for FindError {
    fn from(e: MissingLocation) -> Self {
        FindError::InvalidQuery(e.to_string())
    }
}

impl From<YelpError> for FindError {
    fn from(e: YelpError) -> Self {
        match e {
            YelpError::MissingCredential => FindError::MissingCredential,
            other => FindError::SourceUnavailable(other),
        }
    }
}
