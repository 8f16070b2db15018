//! Query and result types for the venue-ranking pipeline.
//!
//! `Query` is the loosely specified caller input; `Query::normalized` fills
//! every defaultable field exactly once so that downstream stages never
//! reach for a "get with default". `Venue` is the mapped output record,
//! JSON-serializable for the UI boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default search radius when the caller does not set one.
pub const DEFAULT_DISTANCE_KM: f64 = 3.0;
/// Default hard rating floor.
pub const DEFAULT_MIN_RATING: f64 = 4.0;
/// Default result budget.
pub const DEFAULT_LIMIT: usize = 12;
/// Upstream page-size ceiling; `limit` is clamped here before the search.
pub const MAX_LIMIT: usize = 50;

/// Search origin: a free-text address, coordinates, or both.
///
/// Coordinates take precedence when both representations are present.
/// A `Location` with neither is unusable; the candidate source rejects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl Location {
    /// Returns the coordinate pair when both latitude and longitude are set.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Returns the address if it is present and non-empty.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// True if either representation can drive a search.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.coordinates().is_some() || self.address().is_some()
    }
}

/// Target price tier, `$` (cheapest) through `$$$$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "$")]
    Cheap,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Pricey,
    #[serde(rename = "$$$$")]
    Splurge,
}

impl Budget {
    /// Numeric tier, 1 (`$`) through 4 (`$$$$`) — the `$`-count.
    #[must_use]
    pub fn tier(self) -> u8 {
        match self {
            Budget::Cheap => 1,
            Budget::Moderate => 2,
            Budget::Pricey => 3,
            Budget::Splurge => 4,
        }
    }

    /// Parses a price symbol such as `"$$"` into a tier.
    ///
    /// Returns `None` for anything other than 1–4 dollar signs, which is
    /// how upstream records with unknown price strings stay tier-less.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "$" => Some(Budget::Cheap),
            "$$" => Some(Budget::Moderate),
            "$$$" => Some(Budget::Pricey),
            "$$$$" => Some(Budget::Splurge),
            _ => None,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Budget::Cheap => "$",
            Budget::Moderate => "$$",
            Budget::Pricey => "$$$",
            Budget::Splurge => "$$$$",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Budget::from_symbol(s).ok_or_else(|| format!("invalid budget '{s}', expected $ to $$$$"))
    }
}

/// Caller-facing preference query. Every pipeline-tunable field is optional;
/// [`Query::normalized`] applies the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub location: Location,
    /// Category codes in the upstream taxonomy, e.g. `"japanese"`.
    pub cuisines: Vec<String>,
    /// Category codes as well, e.g. `"vegan"`; merged with `cuisines`.
    pub dietary: Vec<String>,
    pub budget: Option<Budget>,
    /// Free-text mood terms, folded into the search term string.
    pub vibe: Vec<String>,
    /// Search terms that also earn a scoring bonus on match.
    pub keywords: Vec<String>,
    pub distance_km: Option<f64>,
    pub min_rating: Option<f64>,
    pub open_now: Option<bool>,
    pub limit: Option<usize>,
    /// Exclusion phrases, matched case-insensitively against name+categories.
    pub avoid: Vec<String>,
}

impl Query {
    /// Fills defaults into every absent field, producing the fully specified
    /// query the rest of the pipeline operates on.
    ///
    /// `limit` is clamped to `1..=50` (the upstream page-size ceiling) here,
    /// so the search request and the final truncation use the same bound.
    /// A non-finite or non-positive `distance_km` falls back to the default,
    /// keeping the radius strictly positive. Location is not validated; the
    /// candidate source detects an unusable one.
    #[must_use]
    pub fn normalized(self) -> NormalizedQuery {
        NormalizedQuery {
            location: self.location,
            cuisines: self.cuisines,
            dietary: self.dietary,
            budget: self.budget,
            vibe: self.vibe,
            keywords: self.keywords,
            distance_km: self
                .distance_km
                .filter(|d| d.is_finite() && *d > 0.0)
                .unwrap_or(DEFAULT_DISTANCE_KM),
            min_rating: self.min_rating.unwrap_or(DEFAULT_MIN_RATING),
            open_now: self.open_now.unwrap_or(true),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            avoid: self.avoid,
        }
    }
}

/// A fully specified query: same shape as [`Query`] but with every
/// defaultable field populated. Immutable input to every pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuery {
    pub location: Location,
    pub cuisines: Vec<String>,
    pub dietary: Vec<String>,
    pub budget: Option<Budget>,
    pub vibe: Vec<String>,
    pub keywords: Vec<String>,
    pub distance_km: f64,
    pub min_rating: f64,
    pub open_now: bool,
    pub limit: usize,
    pub avoid: Vec<String>,
}

/// One ranked, mapped venue — the pipeline's output record.
///
/// `snippet` is populated only for the top five results; coordinates are
/// `None` when the upstream record omitted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
    pub price: Option<String>,
    pub categories: Vec<String>,
    pub url: Option<String>,
    /// Non-empty address components joined with `", "`.
    pub address: String,
    /// Distance from the search origin in km, rounded to 2 decimals.
    pub distance_km: f64,
    pub phone: Option<String>,
    pub snippet: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_applies_documented_defaults() {
        let q = Query::default().normalized();
        assert!((q.distance_km - 3.0).abs() < f64::EPSILON);
        assert!((q.min_rating - 4.0).abs() < f64::EPSILON);
        assert!(q.open_now);
        assert_eq!(q.limit, 12);
        assert!(q.avoid.is_empty());
    }

    #[test]
    fn normalized_preserves_explicit_values() {
        let q = Query {
            distance_km: Some(7.5),
            min_rating: Some(3.0),
            open_now: Some(false),
            limit: Some(25),
            avoid: vec!["pizza".into()],
            ..Query::default()
        }
        .normalized();
        assert!((q.distance_km - 7.5).abs() < f64::EPSILON);
        assert!((q.min_rating - 3.0).abs() < f64::EPSILON);
        assert!(!q.open_now);
        assert_eq!(q.limit, 25);
        assert_eq!(q.avoid, vec!["pizza".to_string()]);
    }

    #[test]
    fn normalized_clamps_limit_to_page_ceiling() {
        let q = Query {
            limit: Some(500),
            ..Query::default()
        }
        .normalized();
        assert_eq!(q.limit, 50);
    }

    #[test]
    fn normalized_rejects_non_finite_or_non_positive_distance() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -2.0] {
            let q = Query {
                distance_km: Some(bad),
                ..Query::default()
            }
            .normalized();
            assert!(
                (q.distance_km - DEFAULT_DISTANCE_KM).abs() < f64::EPSILON,
                "distance {bad} should fall back to the default"
            );
        }
    }

    #[test]
    fn normalized_clamps_zero_limit_up_to_one() {
        let q = Query {
            limit: Some(0),
            ..Query::default()
        }
        .normalized();
        assert_eq!(q.limit, 1);
    }

    #[test]
    fn coordinates_require_both_components() {
        let loc = Location {
            latitude: Some(45.5),
            longitude: None,
            address: None,
        };
        assert_eq!(loc.coordinates(), None);
        assert!(!loc.is_usable());
    }

    #[test]
    fn blank_address_is_not_usable() {
        let loc = Location {
            latitude: None,
            longitude: None,
            address: Some("   ".into()),
        };
        assert!(!loc.is_usable());
    }

    #[test]
    fn coordinates_take_both_components() {
        let loc = Location {
            latitude: Some(45.5),
            longitude: Some(-122.6),
            address: Some("Portland, OR".into()),
        };
        assert_eq!(loc.coordinates(), Some((45.5, -122.6)));
    }

    #[test]
    fn budget_tier_is_dollar_count() {
        assert_eq!(Budget::Cheap.tier(), 1);
        assert_eq!(Budget::Splurge.tier(), 4);
    }

    #[test]
    fn budget_from_symbol_rejects_garbage() {
        assert_eq!(Budget::from_symbol("$$$$$"), None);
        assert_eq!(Budget::from_symbol("cheap"), None);
        assert_eq!(Budget::from_symbol(""), None);
    }

    #[test]
    fn budget_round_trips_through_display() {
        for b in [
            Budget::Cheap,
            Budget::Moderate,
            Budget::Pricey,
            Budget::Splurge,
        ] {
            assert_eq!(Budget::from_symbol(&b.to_string()), Some(b));
        }
    }

    #[test]
    fn query_deserializes_from_sparse_json() {
        let q: Query = serde_json::from_str(
            r#"{
                "location": { "address": "Alberta St, Portland" },
                "cuisines": ["asian"],
                "budget": "$$",
                "keywords": ["spicy"],
                "avoid": ["pizza"]
            }"#,
        )
        .expect("sparse query should deserialize");
        assert_eq!(q.budget, Some(Budget::Moderate));
        assert_eq!(q.limit, None);
        let n = q.normalized();
        assert_eq!(n.limit, 12);
        assert!(n.open_now);
    }

    #[test]
    fn venue_serializes_null_snippet() {
        let v = Venue {
            id: "abc".into(),
            name: "Cafe".into(),
            rating: 4.5,
            review_count: 10,
            price: None,
            categories: vec![],
            url: None,
            address: String::new(),
            distance_km: 0.42,
            phone: None,
            snippet: None,
            latitude: None,
            longitude: None,
        };
        let json = serde_json::to_value(&v).expect("venue should serialize");
        assert!(json.get("snippet").expect("snippet key").is_null());
    }
}
