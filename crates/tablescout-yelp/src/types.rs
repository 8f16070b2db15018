//! Yelp Fusion API response types.
//!
//! All types model the JSON structures returned by the Fusion REST API.
//! Fields the API documents as optional (or that have been observed missing
//! in practice, like `price` and `distance`) are `Option` or
//! `#[serde(default)]` so a sparse record never fails deserialization.

use serde::Deserialize;

/// Response envelope for `GET /businesses/search`.
///
/// A payload without a `businesses` key deserializes to an empty list,
/// never null.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One raw business record from the search endpoint.
///
/// Lives only for the duration of one pipeline invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Business {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    /// Price symbol, `"$"` through `"$$$$"`. Often absent.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Distance from the search origin in meters.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub location: Option<BusinessAddress>,
    #[serde(default)]
    pub display_phone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Business {
    /// Rating with the API's "missing means unrated" collapsed to 0.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Price tier as a `$`-count, `None` when absent or unrecognized.
    #[must_use]
    pub fn price_tier(&self) -> Option<u8> {
        self.price
            .as_deref()
            .and_then(tablescout_core::Budget::from_symbol)
            .map(tablescout_core::Budget::tier)
    }
}

/// A category tag on a business.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Structured address components on a business record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessAddress {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// Response envelope for `GET /businesses/{id}/reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// One review excerpt from the reviews endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}
