//! Candidate exclusion: avoid-phrase matching and the rating floor.
//!
//! The text predicates are pure functions over plain strings so they can be
//! tested without building a full business record.

use tablescout_yelp::{search_text, Business};

/// Case-insensitive substring check of one phrase against a text.
///
/// Empty or whitespace-only phrases never match, so a malformed avoid list
/// cannot wipe out every candidate.
#[must_use]
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&phrase)
}

/// True when any phrase in the list matches the text.
#[must_use]
pub fn contains_any_phrase(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| contains_phrase(text, p))
}

/// Removes candidates whose name+categories text matches any avoid phrase.
///
/// An empty avoid list is the identity.
#[must_use]
pub fn apply_avoid(businesses: Vec<Business>, avoid: &[String]) -> Vec<Business> {
    if avoid.is_empty() {
        return businesses;
    }
    businesses
        .into_iter()
        .filter(|b| !contains_any_phrase(&search_text(b), avoid))
        .collect()
}

/// Removes candidates below the rating floor. A missing rating counts as 0,
/// so unrated venues survive only a non-positive floor.
#[must_use]
pub fn apply_min_rating(businesses: Vec<Business>, min_rating: f64) -> Vec<Business> {
    businesses
        .into_iter()
        .filter(|b| b.rating_or_zero() >= min_rating)
        .collect()
}

#[cfg(test)]
mod tests {
    use tablescout_yelp::Category;

    use super::*;

    fn business(name: &str, rating: Option<f64>, categories: &[&str]) -> Business {
        Business {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            rating,
            review_count: 10,
            price: None,
            categories: categories
                .iter()
                .map(|t| Category {
                    alias: t.to_lowercase(),
                    title: (*t).to_string(),
                })
                .collect(),
            distance: Some(500.0),
            coordinates: None,
            location: None,
            display_phone: None,
            url: None,
        }
    }

    #[test]
    fn phrase_match_is_case_insensitive() {
        assert!(contains_phrase("tony's pizza kitchen", "PIZZA"));
        assert!(contains_phrase("Tony's Pizza Kitchen".to_lowercase().as_str(), "pizza"));
    }

    #[test]
    fn empty_phrase_never_matches() {
        assert!(!contains_phrase("anything at all", ""));
        assert!(!contains_phrase("anything at all", "   "));
    }

    #[test]
    fn avoid_excludes_by_name_substring() {
        let survivors = apply_avoid(
            vec![
                business("Tony's Pizza Kitchen", Some(4.9), &["Italian"]),
                business("Spice House", Some(4.5), &["Thai"]),
            ],
            &["pizza".to_string()],
        );
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].name, "Spice House");
    }

    #[test]
    fn avoid_excludes_by_category_title() {
        let survivors = apply_avoid(
            vec![
                business("Slice City", Some(4.9), &["Pizza"]),
                business("Spice House", Some(4.5), &["Thai"]),
            ],
            &["pizza".to_string()],
        );
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].name, "Spice House");
    }

    #[test]
    fn empty_avoid_list_is_identity() {
        let input = vec![
            business("Tony's Pizza Kitchen", Some(4.9), &["Italian"]),
            business("Spice House", Some(4.5), &["Thai"]),
        ];
        let survivors = apply_avoid(input.clone(), &[]);
        assert_eq!(survivors.len(), input.len());
    }

    #[test]
    fn rating_floor_drops_low_rated() {
        let survivors = apply_min_rating(
            vec![
                business("Meh Diner", Some(3.9), &[]),
                business("Spice House", Some(4.0), &[]),
            ],
            4.0,
        );
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].name, "Spice House");
    }

    #[test]
    fn missing_rating_counts_as_zero() {
        let survivors = apply_min_rating(vec![business("Unrated", None, &[])], 4.0);
        assert!(survivors.is_empty());

        let survivors = apply_min_rating(vec![business("Unrated", None, &[])], 0.0);
        assert_eq!(survivors.len(), 1);
    }
}
