//! CLI commands for gatherer-scrape.
//!
//! Supports scraping a whole listing, listing card URLs only, and scraping a
//! single card page.

use std::fmt::Write as _;
use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use url::Url;

use crate::config::AppConfig;
use crate::scraper::parsers::{fetch_card_urls, CardData};
use crate::scraper::{card_url, spoiler_url, Card, Fetch, HttpFetcher, WorkerPool};

#[derive(Parser)]
#[command(name = "gatherer-scrape")]
#[command(version, about = "Scrape card data from the Gatherer card database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape every card of a text spoiler listing
    Scrape {
        #[command(flatten)]
        listing: ListingArgs,

        /// Maximum simultaneous card fetches
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Print the card URLs of a text spoiler listing
    Urls {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Scrape a single card page
    Card {
        /// Card page URL or multiverse id
        #[arg(value_name = "URL|ID")]
        target: String,
    },
}

/// Which listing to read; falls back to the configured one.
#[derive(clap::Args)]
pub struct ListingArgs {
    /// Text spoiler URL
    #[arg(value_name = "LISTING_URL", conflicts_with = "set")]
    pub url: Option<Url>,

    /// Set name to build the spoiler URL from (e.g. "Innistrad")
    #[arg(short, long)]
    pub set: Option<String>,
}

impl ListingArgs {
    fn resolve(self, config: &AppConfig) -> anyhow::Result<Url> {
        match (self.url, self.set) {
            (Some(url), _) => Ok(url),
            (None, Some(set)) => Ok(Url::parse(&spoiler_url(&set))?),
            (None, None) => Ok(Url::parse(&config.scraper.listing_url)?),
        }
    }
}

/// Scrape every card of a listing to stdout.
pub async fn run_scrape(listing: ListingArgs, workers: Option<usize>) -> anyhow::Result<()> {
    let mut config = AppConfig::load()?;
    if let Some(w) = workers {
        config.scraper.workers = w;
    }
    let listing_url = listing.resolve(&config)?;

    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new(&config.scraper.user_agent)?);
    let pool = WorkerPool::new(config.scraper.workers);
    let started = Instant::now();

    let count = scrape_listing(fetcher, &pool, &listing_url, &mut io::stdout()).await?;

    tracing::info!(
        "Scraped {} cards in {:.2}s",
        count,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Fetch the listing, fan out one card task per URL, and write the cards to
/// `out` in listing order. Returns the number of cards written.
pub async fn scrape_listing<W: io::Write>(
    fetcher: Arc<dyn Fetch>,
    pool: &WorkerPool,
    listing_url: &Url,
    out: &mut W,
) -> anyhow::Result<usize> {
    tracing::info!("Fetching listing: {}", listing_url);
    let urls = fetch_card_urls(fetcher.as_ref(), listing_url).await?;
    tracing::info!("Found {} cards, scraping with {} workers", urls.len(), pool.size());

    let cards: Vec<Card> = urls
        .into_iter()
        .map(|url| Card::spawn(url, pool, Arc::clone(&fetcher)))
        .collect();

    for card in &cards {
        let data = card.data().await.inspect_err(|e| {
            tracing::error!("Failed to scrape {}: {}", card.url(), e);
        })?;
        out.write_all(format_card(&data).as_bytes())?;
    }
    out.flush()?;

    Ok(cards.len())
}

/// Print the card URLs of a listing, one per line.
pub async fn run_urls(listing: ListingArgs) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let listing_url = listing.resolve(&config)?;
    let fetcher = HttpFetcher::new(&config.scraper.user_agent)?;

    tracing::info!("Fetching listing: {}", listing_url);
    for url in fetch_card_urls(&fetcher, &listing_url).await? {
        println!("{}", url);
    }
    Ok(())
}

/// Scrape and print one card page.
pub async fn run_card(target: String) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let url = match target.parse::<u32>() {
        Ok(multiverse_id) => Url::parse(&card_url(multiverse_id))?,
        Err(_) => Url::parse(&target)?,
    };

    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new(&config.scraper.user_agent)?);
    let card = Card::spawn(url, &WorkerPool::new(1), fetcher);
    let data = card.data().await?;
    print!("{}", format_card(&data));
    Ok(())
}

/// Console block for one card, ending with a blank separator line.
pub fn format_card(card: &CardData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.name);
    let _ = writeln!(out, " {:?}", card.mana_cost);
    let _ = writeln!(out, " {:?}", card.sets);
    let _ = writeln!(out, " {:?}", card.types);
    let _ = writeln!(out, " {:?}", card.subtypes);
    let _ = writeln!(out, " {}", card.text);
    let _ = writeln!(out, " {:?}", card.rarities);
    let _ = writeln!(
        out,
        "PT {} / {}",
        or_dash(card.power.as_deref()),
        or_dash(card.toughness.as_deref())
    );
    let _ = writeln!(out, "L  {}", or_dash(card.loyalty.as_deref()));
    let _ = writeln!(out, " {}", or_dash(card.assoc_card.as_deref()));
    out.push('\n');
    out
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
