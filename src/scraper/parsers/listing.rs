//! Text spoiler (search result listing) parser.
//!
//! Pages from the Unglued and Unhinged sets use a different card layout and
//! are not supported.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use super::card::PART_PARAM;
use super::row::{element_text, selector};
use crate::scraper::error::ScrapeError;
use crate::scraper::fetcher::Fetch;

static SPOILER: LazyLock<Selector> = LazyLock::new(|| selector("div.textspoiler"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\((.*)\)").expect("valid regex"));

/// Parser for text spoiler pages
pub struct ListingParser;

impl ListingParser {
    /// Extract card URLs from a spoiler page, in document order.
    ///
    /// Links to one face of a multi-faced card read like
    /// `Fire // Ice (Fire)`; the parenthesized face is carried along as a
    /// `part=` query parameter.
    pub fn parse(html: &str, listing_url: &Url) -> Result<Vec<Url>, ScrapeError> {
        let document = Html::parse_document(html);
        let spoiler = document.select(&SPOILER).next().ok_or_else(|| {
            ScrapeError::Parse(format!("no textspoiler container on {}", listing_url))
        })?;

        let mut urls = Vec::new();
        for link in spoiler.select(&LINK) {
            let href = link
                .value()
                .attr("href")
                .ok_or_else(|| ScrapeError::Parse("card link without href".to_string()))?;
            let mut url = listing_url
                .join(href)
                .map_err(|e| ScrapeError::Parse(format!("bad card link '{}': {}", href, e)))?;

            let text = element_text(link);
            if text.contains('(') {
                let part = PART_RE
                    .captures(&text)
                    .map(|caps| caps[1].to_string())
                    .ok_or_else(|| ScrapeError::Parse(format!("unbalanced card name '{}'", text)))?;
                url.query_pairs_mut().append_pair(PART_PARAM, &part);
            }

            urls.push(url);
        }

        tracing::debug!("Extracted {} card links from {}", urls.len(), listing_url);
        Ok(urls)
    }
}

/// Fetch a spoiler page and extract its card URLs.
pub async fn fetch_card_urls(
    fetcher: &dyn Fetch,
    listing_url: &Url,
) -> Result<Vec<Url>, ScrapeError> {
    let html = fetcher.fetch(listing_url).await?;
    ListingParser::parse(&html, listing_url)
}
