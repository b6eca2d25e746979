//! Card records populated in the background.
//!
//! [`Card::spawn`] returns immediately after queueing a fetch+parse task on
//! the [`WorkerPool`]. Every accessor awaits that single task, so the page is
//! fetched once no matter how many fields are read, and a failed task yields
//! the same error to every caller.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use url::Url;

use super::error::ScrapeError;
use super::fetcher::Fetch;
use super::parsers::{CardData, CardParser, Rarities};
use super::pool::WorkerPool;

type CardTask = Shared<BoxFuture<'static, Result<Arc<CardData>, ScrapeError>>>;

/// Handle to a card being scraped
#[derive(Clone)]
pub struct Card {
    url: Url,
    task: CardTask,
}

impl Card {
    /// Queue the fetch and parse of `url` on `pool`.
    pub fn spawn(url: Url, pool: &WorkerPool, fetcher: Arc<dyn Fetch>) -> Self {
        let task_url = url.clone();
        let handle = pool.spawn(async move {
            let html = fetcher.fetch(&task_url).await?;
            let card = CardParser::parse(&html, &task_url)?;
            tracing::debug!("Parsed '{}' from {}", card.name, task_url);
            Ok(Arc::new(card))
        });

        let task = async move {
            handle
                .await
                .map_err(|e| ScrapeError::Worker(e.to_string()))?
        }
        .boxed()
        .shared();

        Self { url, task }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Wait for the card and return all of its fields.
    pub async fn data(&self) -> Result<Arc<CardData>, ScrapeError> {
        self.task.clone().await
    }

    pub async fn name(&self) -> Result<String, ScrapeError> {
        Ok(self.data().await?.name.clone())
    }

    pub async fn img_url(&self) -> Result<String, ScrapeError> {
        Ok(self.data().await?.img_url.clone())
    }

    pub async fn mana_cost(&self) -> Result<Vec<String>, ScrapeError> {
        Ok(self.data().await?.mana_cost.clone())
    }

    pub async fn rarities(&self) -> Result<Rarities, ScrapeError> {
        Ok(self.data().await?.rarities.clone())
    }

    pub async fn sets(&self) -> Result<Vec<String>, ScrapeError> {
        Ok(self.data().await?.sets.clone())
    }

    pub async fn text(&self) -> Result<String, ScrapeError> {
        Ok(self.data().await?.text.clone())
    }

    pub async fn types(&self) -> Result<Vec<String>, ScrapeError> {
        Ok(self.data().await?.types.clone())
    }

    pub async fn subtypes(&self) -> Result<Vec<String>, ScrapeError> {
        Ok(self.data().await?.subtypes.clone())
    }

    pub async fn colors(&self) -> Result<Vec<String>, ScrapeError> {
        Ok(self.data().await?.colors.clone())
    }

    pub async fn power(&self) -> Result<Option<String>, ScrapeError> {
        Ok(self.data().await?.power.clone())
    }

    pub async fn toughness(&self) -> Result<Option<String>, ScrapeError> {
        Ok(self.data().await?.toughness.clone())
    }

    pub async fn loyalty(&self) -> Result<Option<String>, ScrapeError> {
        Ok(self.data().await?.loyalty.clone())
    }

    pub async fn assoc_card(&self) -> Result<Option<String>, ScrapeError> {
        Ok(self.data().await?.assoc_card.clone())
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("url", &self.url.as_str())
            .field("ready", &self.task.peek().is_some())
            .finish()
    }
}
