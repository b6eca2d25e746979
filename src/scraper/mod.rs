//! Web scraper module for gatherer.wizards.com
//!
//! Provides page fetching, HTML parsing, and concurrently populated card
//! records.

pub mod card;
pub mod error;
pub mod fetcher;
pub mod parsers;
pub mod pool;

pub use card::Card;
pub use error::ScrapeError;
pub use fetcher::{Fetch, HttpFetcher};
pub use pool::WorkerPool;

/// Base URL for gatherer.wizards.com
pub const BASE_URL: &str = "http://gatherer.wizards.com";

/// Text spoiler listing every card of Dark Ascension
pub const DEFAULT_LISTING_URL: &str = "http://gatherer.wizards.com/Pages/Search/Default.aspx?output=spoiler&method=text&action=advanced&set=+%5b%22Dark+Ascension%22%5d";

/// Build card detail URL
pub fn card_url(multiverse_id: u32) -> String {
    format!("{}/Pages/Card/Details.aspx?multiverseid={}", BASE_URL, multiverse_id)
}

/// Build text spoiler URL for a set
pub fn spoiler_url(set_name: &str) -> String {
    let set = format!("[\"{}\"]", set_name);
    let encoded: String = url::form_urlencoded::byte_serialize(set.as_bytes()).collect();
    format!(
        "{}/Pages/Search/Default.aspx?output=spoiler&method=text&action=advanced&set=+{}",
        BASE_URL, encoded
    )
}
