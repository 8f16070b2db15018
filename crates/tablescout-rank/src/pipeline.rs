//! The query-to-ranking pipeline.
//!
//! 1. Normalize the query (defaults filled once, centrally).
//! 2. Map it to search parameters and issue one search call.
//! 3. Drop avoided and low-rated candidates.
//! 4. Score survivors, sort descending (stable on ties), truncate.
//! 5. Map to [`Venue`] records.
//! 6. Enrich the top five with a review snippet, concurrently and
//!    best-effort.
//!
//! Each stage consumes the previous stage's complete output; only the
//! network calls are async. A failed search aborts the invocation; a failed
//! snippet lookup degrades that one snippet and nothing else.

use tablescout_core::{NormalizedQuery, Query, Venue};
use tablescout_yelp::{search_params, to_venue, Business, YelpClient};

use crate::error::FindError;
use crate::{filter, scorer, snippet};

/// How many top results receive a snippet. One extra network call each.
const SNIPPET_BUDGET: usize = 5;

/// Runs the full pipeline for one query and returns the ranked venues.
///
/// # Errors
///
/// - [`FindError::InvalidQuery`] if the query has no usable location
///   (detected before any network call).
/// - [`FindError::MissingCredential`] if the client surfaces a missing key.
/// - [`FindError::SourceUnavailable`] if the search call fails; no partial
///   list is returned. Enrichment failures never propagate.
pub async fn find_dinner(client: &YelpClient, query: Query) -> Result<Vec<Venue>, FindError> {
    let query = query.normalized();
    let params = search_params(&query)?;

    let candidates = client.search(&params).await?;
    tracing::debug!(candidates = candidates.len(), "search returned");

    let candidates = filter::apply_avoid(candidates, &query.avoid);
    let candidates = filter::apply_min_rating(candidates, query.min_rating);
    tracing::debug!(survivors = candidates.len(), "filters applied");

    let ranked = rank(candidates, &query);
    let mut venues: Vec<Venue> = ranked.iter().map(to_venue).collect();

    enrich_snippets(client, &mut venues).await;

    Ok(venues)
}

/// Sorts by score descending and truncates to the query limit.
///
/// `sort_by` is stable, so equal scores keep the upstream best-match
/// order. Truncation happens after the sort, never before.
fn rank(candidates: Vec<Business>, query: &NormalizedQuery) -> Vec<Business> {
    let mut scored: Vec<(f64, Business)> = candidates
        .into_iter()
        .map(|b| (scorer::score_business(&b, query), b))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(query.limit);
    scored.into_iter().map(|(_, b)| b).collect()
}

/// Attaches review snippets to the first `SNIPPET_BUDGET` venues.
///
/// The lookups are independent and run concurrently behind a join barrier;
/// each future is keyed to its result slot, so attachment stays correct
/// regardless of completion order. A sequential loop would produce
/// identical output.
async fn enrich_snippets(client: &YelpClient, venues: &mut [Venue]) {
    let count = venues.len().min(SNIPPET_BUDGET);
    let lookups = venues[..count]
        .iter()
        .map(|v| fetch_snippet(client, v.id.clone()));
    let snippets = futures::future::join_all(lookups).await;

    for (venue, fetched) in venues[..count].iter_mut().zip(snippets) {
        venue.snippet = fetched;
    }
}

/// Fetches the first review excerpt for one business.
///
/// Any failure — transport, status, timeout, or an empty review list — is
/// swallowed here: a missing snippet is a minor degradation, not a pipeline
/// failure.
async fn fetch_snippet(client: &YelpClient, business_id: String) -> Option<String> {
    match client.reviews(&business_id).await {
        Ok(reviews) => reviews
            .first()
            .map(|r| snippet::clean_excerpt(&r.text))
            .filter(|s| !s.is_empty()),
        Err(e) => {
            tracing::debug!(business = %business_id, error = %e, "review lookup failed, snippet skipped");
            None
        }
    }
}
