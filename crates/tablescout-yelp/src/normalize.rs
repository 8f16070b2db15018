//! Normalization of raw Yelp business records into domain [`Venue`] values.

use tablescout_core::Venue;

use crate::types::{Business, BusinessAddress, Category};

/// Converts a distance in meters to kilometers, rounded to 2 decimals.
#[must_use]
pub fn km_from_meters(meters: f64) -> f64 {
    (meters / 1000.0 * 100.0).round() / 100.0
}

/// Joins the non-empty address components with `", "`.
#[must_use]
pub fn join_address(loc: &BusinessAddress) -> String {
    [
        &loc.address1,
        &loc.address2,
        &loc.address3,
        &loc.city,
        &loc.state,
        &loc.zip_code,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Flattens category objects into their display titles.
#[must_use]
pub fn category_titles(categories: &[Category]) -> Vec<String> {
    categories.iter().map(|c| c.title.clone()).collect()
}

/// Lowercased "name + category titles" text used for avoid-phrase and
/// keyword matching.
#[must_use]
pub fn search_text(business: &Business) -> String {
    let titles = category_titles(&business.categories);
    format!("{} {}", business.name, titles.join(" ")).to_lowercase()
}

/// Maps a raw business record to the output [`Venue`] shape.
///
/// Missing numeric fields default to 0, missing optional fields to `None`;
/// the mapping is pure and idempotent. `snippet` starts out `None` and is
/// attached later by enrichment.
#[must_use]
pub fn to_venue(business: &Business) -> Venue {
    let coords = business.coordinates;
    Venue {
        id: business.id.clone(),
        name: business.name.clone(),
        rating: business.rating_or_zero(),
        review_count: business.review_count,
        price: business.price.clone(),
        categories: category_titles(&business.categories),
        url: business.url.clone(),
        address: business
            .location
            .as_ref()
            .map(join_address)
            .unwrap_or_default(),
        distance_km: km_from_meters(business.distance.unwrap_or(0.0)),
        phone: business.display_phone.clone(),
        snippet: None,
        latitude: coords.and_then(|c| c.latitude),
        longitude: coords.and_then(|c| c.longitude),
    }
}
