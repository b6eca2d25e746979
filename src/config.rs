//! Configuration for the Gatherer scraper.

use serde::{Deserialize, Serialize};

use crate::scraper::pool::DEFAULT_WORKERS;
use crate::scraper::DEFAULT_LISTING_URL;

/// Scraper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Text spoiler page listing the cards to scrape
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
    /// Maximum simultaneous card fetches
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_listing_url() -> String {
    DEFAULT_LISTING_URL.to_string()
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_user_agent() -> String {
    format!("gatherer-scrape/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            workers: default_workers(),
            user_agent: default_user_agent(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

impl AppConfig {
    /// Load configuration from environment and config file
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Add config file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (GATHERER_SCRAPER__WORKERS, etc.)
            .add_source(
                config::Environment::with_prefix("GATHERER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
