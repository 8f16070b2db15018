//! Venue ranking pipeline for tablescout.
//!
//! Takes a preference [`Query`](tablescout_core::Query), issues one search
//! through the Yelp client, excludes avoided and low-rated candidates,
//! scores survivors with a five-term linear model, sorts and truncates, and
//! enriches the top results with a short review snippet.

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod scorer;
pub mod snippet;

pub use error::FindError;
pub use pipeline::find_dinner;
