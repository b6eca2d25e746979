//! Concurrent card scraper for the Gatherer card database.
//!
//! A text spoiler listing is turned into card page URLs, every page is
//! fetched on a bounded worker pool, and each page is parsed into a
//! [`scraper::parsers::CardData`] record.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gatherer_scrape::scraper::{parsers::fetch_card_urls, Card, Fetch, HttpFetcher, WorkerPool};
//!
//! let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new("my-agent")?);
//! let pool = WorkerPool::new(20);
//! let urls = fetch_card_urls(fetcher.as_ref(), &listing_url).await?;
//! let cards: Vec<Card> = urls
//!     .into_iter()
//!     .map(|url| Card::spawn(url, &pool, Arc::clone(&fetcher)))
//!     .collect();
//! for card in &cards {
//!     println!("{}", card.name().await?);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod scraper;
