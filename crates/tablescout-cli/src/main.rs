use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod find;

#[derive(Debug, Parser)]
#[command(name = "tablescout")]
#[command(about = "Ranked dining-venue recommendations from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for venues and print them ranked.
    Find(find::FindArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tablescout_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Find(args) => find::run_find(&config, args).await,
    }
}
