//! The `find` command: build a query from flags, run the pipeline, print.

use clap::Args;
use tablescout_core::{AppConfig, Budget, Location, Query, Venue};
use tablescout_rank::find_dinner;
use tablescout_yelp::YelpClient;

#[derive(Debug, Args)]
pub(crate) struct FindArgs {
    /// Address or neighborhood to search near.
    #[arg(long)]
    near: Option<String>,

    /// Latitude of the search origin (takes precedence over --near).
    #[arg(long, requires = "lng")]
    lat: Option<f64>,

    /// Longitude of the search origin.
    #[arg(long, requires = "lat")]
    lng: Option<f64>,

    /// Cuisine category code, repeatable (e.g. --cuisine thai).
    #[arg(long = "cuisine")]
    cuisines: Vec<String>,

    /// Dietary category code, repeatable (e.g. --dietary vegan).
    #[arg(long = "dietary")]
    dietary: Vec<String>,

    /// Target price tier, $ through $$$$.
    #[arg(long)]
    budget: Option<Budget>,

    /// Free-text mood term, repeatable.
    #[arg(long = "vibe")]
    vibe: Vec<String>,

    /// Search keyword that also earns a scoring bonus, repeatable.
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Exclusion phrase matched against name and categories, repeatable.
    #[arg(long = "avoid")]
    avoid: Vec<String>,

    /// Search radius in kilometers (default 3).
    #[arg(long)]
    distance_km: Option<f64>,

    /// Minimum rating, 0 to 5 (default 4).
    #[arg(long)]
    min_rating: Option<f64>,

    /// Include venues that are currently closed.
    #[arg(long)]
    closed_ok: bool,

    /// Maximum number of results, 1 to 50 (default 12).
    #[arg(long)]
    limit: Option<usize>,

    /// Print the results as JSON instead of text.
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run_find(config: &AppConfig, args: FindArgs) -> anyhow::Result<()> {
    let json_output = args.json;
    let query = build_query(args);

    let client = YelpClient::from_config(config)?;
    let venues = find_dinner(&client, query).await?;
    tracing::debug!(results = venues.len(), "find completed");

    if json_output {
        println!("{}", serde_json::to_string_pretty(&venues)?);
    } else if venues.is_empty() {
        println!("no venues matched");
    } else {
        print_venues(&venues);
    }

    Ok(())
}

fn build_query(args: FindArgs) -> Query {
    Query {
        location: Location {
            latitude: args.lat,
            longitude: args.lng,
            address: args.near,
        },
        cuisines: args.cuisines,
        dietary: args.dietary,
        budget: args.budget,
        vibe: args.vibe,
        keywords: args.keywords,
        distance_km: args.distance_km,
        min_rating: args.min_rating,
        open_now: if args.closed_ok { Some(false) } else { None },
        limit: args.limit,
        avoid: args.avoid,
    }
}

fn print_venues(venues: &[Venue]) {
    for (i, v) in venues.iter().enumerate() {
        let price = v.price.as_deref().unwrap_or("-");
        println!(
            "{:>2}. {} — {:.1}★ ({} reviews, {price}, {:.2} km)",
            i + 1,
            v.name,
            v.rating,
            v.review_count,
            v.distance_km,
        );
        if !v.categories.is_empty() {
            println!("    {}", v.categories.join(", "));
        }
        if !v.address.is_empty() {
            println!("    {}", v.address);
        }
        if let Some(snippet) = &v.snippet {
            println!("    \"{snippet}\"");
        }
    }
}
