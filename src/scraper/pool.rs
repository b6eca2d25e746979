//! Bounded worker pool for page fetch tasks.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use super::error::ScrapeError;

/// Default number of simultaneous fetch tasks
pub const DEFAULT_WORKERS: usize = 20;

/// Runs tasks on the tokio runtime, at most `size` at a time.
///
/// Cloning shares the same permits.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Create a pool running up to `size` tasks at once (at least one).
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Spawn `task`; it starts once a permit is free and holds it until done.
    pub fn spawn<T, F>(&self, task: F) -> JoinHandle<Result<T, ScrapeError>>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ScrapeError>> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        tokio::spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| ScrapeError::Worker(format!("worker pool closed: {}", e)))?;
            task.await
        })
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}
