//! HTML parsers for gatherer.wizards.com pages.

pub mod card;
pub mod listing;
pub mod row;

#[cfg(test)]
pub(crate) mod testdata;

pub use card::{CardData, CardParser, PowerToughness, Rarities};
pub use listing::{fetch_card_urls, ListingParser};
