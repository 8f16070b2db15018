//! Yelp Fusion API client for tablescout.
//!
//! Wraps `reqwest` with bearer-key management, per-endpoint timeouts, and
//! typed response deserialization. `params` maps a normalized query onto the
//! search endpoint's parameter shape; `normalize` maps raw business records
//! into the domain [`Venue`](tablescout_core::Venue) shape.

pub mod client;
pub mod error;
pub mod normalize;
pub mod params;
pub mod types;

pub use client::YelpClient;
pub use error::YelpError;
pub use normalize::{search_text, to_venue};
pub use params::{search_params, MissingLocation};
pub use types::{Business, Category, Coordinates, Review};
