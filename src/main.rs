//! Gatherer card scraper
//!
//! Fetches a text spoiler listing and scrapes every card page it links to,
//! several pages at a time, printing the cards in listing order.

use clap::Parser;
use gatherer_scrape::cli::{self, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the card listing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatherer_scrape=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { listing, workers } => cli::run_scrape(listing, workers).await,
        Commands::Urls { listing } => cli::run_urls(listing).await,
        Commands::Card { target } => cli::run_card(target).await,
    }
}
