//! Error type shared by the fetcher, the parsers and card records.

/// Failure while scraping a listing or card page.
///
/// `Clone` so a finished card task can hand the same failure to every
/// accessor that awaits it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Unable to find card '{name}' on {url}")]
    CardNotFound { name: String, url: String },

    #[error("Malformed card page: {0}")]
    MalformedPage(String),

    #[error("Failed to parse listing page: {0}")]
    Parse(String),

    #[error("Card task did not complete: {0}")]
    Worker(String),
}

impl ScrapeError {
    pub fn fetch(url: impl ToString, message: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPage(message.into())
    }
}
