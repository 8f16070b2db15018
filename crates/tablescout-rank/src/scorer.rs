//! Composite desirability scoring.
//!
//! The score is a flat sum of five independently computable terms, kept as
//! separate functions so each weight can be unit-tested and tuned on its
//! own. No cross-candidate normalization happens; absolute scale only
//! matters for ordering within one pipeline run.

use std::collections::HashSet;

use tablescout_core::{Budget, NormalizedQuery};
use tablescout_yelp::normalize::km_from_meters;
use tablescout_yelp::{search_text, Business};

/// Review count at which the volume term saturates.
const REVIEW_SATURATION: f64 = 500.0;
/// Cap on the review-volume term.
const REVIEW_TERM_CAP: f64 = 2.0;
/// Score lost per kilometer beyond the requested radius.
const DISTANCE_WEIGHT: f64 = 0.5;
/// Bonus for an exact price-tier match.
const PRICE_MATCH_BONUS: f64 = 1.5;
/// Bonus lost per tier of price mismatch.
const PRICE_STEP_PENALTY: f64 = 0.75;
/// Bonus per distinct matched keyword.
const KEYWORD_WEIGHT: f64 = 0.5;

/// Diminishing-returns credit for popularity: `log10(1 + n)` scaled so the
/// term hits its cap of 2.0 at 500 reviews, and 0 at none.
#[must_use]
pub fn review_volume_term(review_count: u32) -> f64 {
    let n = f64::from(review_count);
    ((1.0 + n).log10() / (1.0 + REVIEW_SATURATION).log10() * REVIEW_TERM_CAP).min(REVIEW_TERM_CAP)
}

/// Zero inside the requested radius, then a linear penalty per kilometer
/// beyond it.
#[must_use]
pub fn distance_penalty(candidate_km: f64, radius_km: f64) -> f64 {
    if candidate_km <= radius_km {
        0.0
    } else {
        -DISTANCE_WEIGHT * (candidate_km - radius_km)
    }
}

/// Bonus for price-tier proximity, applied only when both sides carry a
/// tier: 1.5 for an exact match, 0.75 one tier off, 0 beyond that.
#[must_use]
pub fn price_alignment(candidate_tier: Option<u8>, wanted_tier: Option<u8>) -> f64 {
    match (candidate_tier, wanted_tier) {
        (Some(candidate), Some(wanted)) => {
            let diff = f64::from(candidate.abs_diff(wanted));
            (PRICE_MATCH_BONUS - PRICE_STEP_PENALTY * diff).max(0.0)
        }
        _ => 0.0,
    }
}

/// 0.5 per distinct lowercased keyword found as a substring of the
/// name+categories text. No cap.
#[must_use]
pub fn keyword_bonus(text: &str, keywords: &[String]) -> f64 {
    let distinct: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let matches = distinct
        .iter()
        .filter(|k| !k.is_empty() && text.contains(k.as_str()))
        .count();
    #[allow(clippy::cast_precision_loss)]
    let matches = matches as f64;
    KEYWORD_WEIGHT * matches
}

/// Sums the five terms for one candidate against one query.
///
/// Uses the 2-decimal-rounded km distance, so the penalty is consistent
/// with the `distance_km` shown on the mapped venue.
#[must_use]
pub fn score_business(business: &Business, query: &NormalizedQuery) -> f64 {
    let rating = business.rating_or_zero();
    let reviews = review_volume_term(business.review_count);
    let distance = distance_penalty(
        km_from_meters(business.distance.unwrap_or(0.0)),
        query.distance_km,
    );
    let price = price_alignment(business.price_tier(), query.budget.map(Budget::tier));
    let keywords = keyword_bonus(&search_text(business), &query.keywords);

    rating + reviews + distance + price + keywords
}

#[cfg(test)]
mod tests {
    use tablescout_core::{Location, Query};
    use tablescout_yelp::Category;

    use super::*;

    const EPS: f64 = 1e-9;

    fn spice_house(distance_meters: f64) -> Business {
        Business {
            id: "spice-house-pdx".into(),
            name: "Spice House".into(),
            rating: Some(4.8),
            review_count: 500,
            price: Some("$$".into()),
            categories: vec![Category {
                alias: "thai".into(),
                title: "Thai".into(),
            }],
            distance: Some(distance_meters),
            coordinates: None,
            location: None,
            display_phone: None,
            url: None,
        }
    }

    fn query() -> NormalizedQuery {
        Query {
            location: Location {
                address: Some("Portland, OR".into()),
                ..Location::default()
            },
            budget: Some(Budget::Moderate),
            keywords: vec!["spice".into()],
            ..Query::default()
        }
        .normalized()
    }

    #[test]
    fn review_term_zero_at_no_reviews() {
        assert!(review_volume_term(0).abs() < EPS);
    }

    #[test]
    fn review_term_saturates_at_five_hundred() {
        assert!((review_volume_term(500) - 2.0).abs() < EPS);
        assert!((review_volume_term(100_000) - 2.0).abs() < EPS);
    }

    #[test]
    fn review_term_grows_with_diminishing_returns() {
        let low = review_volume_term(10);
        let mid = review_volume_term(100);
        assert!(low > 0.0 && mid > low && mid < 2.0);
        // First 90 extra reviews buy more than the next 400.
        assert!(mid - low > review_volume_term(500) - mid);
    }

    #[test]
    fn no_penalty_inside_radius() {
        assert!(distance_penalty(1.2, 3.0).abs() < EPS);
        assert!(distance_penalty(3.0, 3.0).abs() < EPS);
    }

    #[test]
    fn linear_penalty_beyond_radius() {
        assert!((distance_penalty(5.0, 3.0) + 1.0).abs() < EPS);
        assert!((distance_penalty(4.0, 3.0) + 0.5).abs() < EPS);
    }

    #[test]
    fn price_alignment_steps_down_by_tier_distance() {
        assert!((price_alignment(Some(2), Some(2)) - 1.5).abs() < EPS);
        assert!((price_alignment(Some(3), Some(2)) - 0.75).abs() < EPS);
        assert!(price_alignment(Some(4), Some(2)).abs() < EPS);
        assert!(price_alignment(Some(4), Some(1)).abs() < EPS);
    }

    #[test]
    fn price_alignment_needs_both_sides() {
        assert!(price_alignment(None, Some(2)).abs() < EPS);
        assert!(price_alignment(Some(2), None).abs() < EPS);
        assert!(price_alignment(None, None).abs() < EPS);
    }

    #[test]
    fn keyword_bonus_counts_distinct_matches_only() {
        let text = "spice house thai";
        let kws = vec!["spice".to_string(), "SPICE".into(), "thai".into()];
        assert!((keyword_bonus(text, &kws) - 1.0).abs() < EPS);
    }

    #[test]
    fn keyword_bonus_is_uncapped() {
        let text = "a b c d e f g h";
        let kws: Vec<String> = ["a", "b", "c", "d", "e", "f", "g", "h"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert!((keyword_bonus(text, &kws) - 4.0).abs() < EPS);
    }

    #[test]
    fn empty_keyword_earns_nothing() {
        assert!(keyword_bonus("anything", &[String::new()]).abs() < EPS);
    }

    // 4.8 rating + 2.0 review term + 0 distance + 1.5 exact price + 0.5 keyword
    #[test]
    fn well_matched_nearby_candidate_scores_eight_point_eight() {
        let score = score_business(&spice_house(1200.0), &query());
        assert!((score - 8.8).abs() < EPS, "got {score}");
    }

    // Same candidate 5 km out against a 3 km radius loses exactly 1.0.
    #[test]
    fn distance_overshoot_costs_half_point_per_km() {
        let score = score_business(&spice_house(5000.0), &query());
        assert!((score - 7.8).abs() < EPS, "got {score}");
    }
}
