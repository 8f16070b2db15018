//! Mapping from a [`NormalizedQuery`] to the search endpoint's parameters.
//!
//! All mapping rules live here, separate from the transport, so they can be
//! tested without a server: radius clamping, category/term concatenation,
//! budget-to-tier conversion, and the location precedence rule.

use tablescout_core::NormalizedQuery;
use thiserror::Error;

/// Meters floor that avoids a degenerate zero-radius search.
const MIN_RADIUS_METERS: f64 = 100.0;
/// The API's maximum search radius in meters.
const MAX_RADIUS_METERS: f64 = 40_000.0;

/// The query carried neither a coordinate pair nor an address.
#[derive(Debug, Error)]
#[error("location required: either latitude and longitude, or an address")]
pub struct MissingLocation;

/// Builds the search request's query parameters from a normalized query.
///
/// Coordinates take precedence over the address when both are present.
/// Cuisine and dietary codes are concatenated verbatim (they must already
/// match the API taxonomy); keywords and vibe terms are space-joined into
/// one `term` string. `open_now` and `price` are emitted only when set.
///
/// # Errors
///
/// Returns [`MissingLocation`] if the query has no usable location. This is
/// the only failure mode; it is detected before any network traffic.
pub fn search_params(
    query: &NormalizedQuery,
) -> Result<Vec<(&'static str, String)>, MissingLocation> {
    let mut params: Vec<(&'static str, String)> = Vec::new();

    params.push(("limit", query.limit.min(50).to_string()));
    params.push(("sort_by", "best_match".to_string()));

    if let Some((lat, lng)) = query.location.coordinates() {
        params.push(("latitude", lat.to_string()));
        params.push(("longitude", lng.to_string()));
    } else if let Some(address) = query.location.address() {
        params.push(("location", address.to_string()));
    } else {
        return Err(MissingLocation);
    }

    params.push(("radius", radius_meters(query.distance_km).to_string()));

    let categories: Vec<&str> = query
        .cuisines
        .iter()
        .chain(&query.dietary)
        .map(String::as_str)
        .collect();
    if !categories.is_empty() {
        params.push(("categories", categories.join(",")));
    }

    if query.open_now {
        params.push(("open_now", "true".to_string()));
    }

    if let Some(budget) = query.budget {
        params.push(("price", budget.tier().to_string()));
    }

    let terms: Vec<&str> = query
        .keywords
        .iter()
        .chain(&query.vibe)
        .map(String::as_str)
        .collect();
    if !terms.is_empty() {
        params.push(("term", terms.join(" ")));
    }

    Ok(params)
}

/// Converts the requested radius to meters, clamped to the API's bounds.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn radius_meters(distance_km: f64) -> u32 {
    (distance_km * 1000.0).clamp(MIN_RADIUS_METERS, MAX_RADIUS_METERS) as u32
}
