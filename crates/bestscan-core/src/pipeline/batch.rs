//! Batched task scheduling.
//!
//! Tasks are grouped by launch count. A batch is finished only when every
//! task in it has finished (successfully, with an error, or by panicking),
//! then the scheduler sleeps for the cooldown before launching the next one.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Outcome of a batched run, aligned with the input items
#[derive(Debug)]
pub struct BatchRun<T> {
    /// `None` where the task panicked or was cancelled
    pub outcomes: Vec<Option<T>>,
    pub batches: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Batcher {
    batch_size: usize,
    cooldown: Duration,
}

impl Batcher {
    pub fn new(batch_size: usize, cooldown: Duration) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            batch_size,
            cooldown,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches needed for `items` tasks
    pub fn batch_count(&self, items: usize) -> usize {
        items.div_ceil(self.batch_size)
    }

    /// Launch one task per item, batch by batch.
    ///
    /// `launch` is called when the item's batch starts, never earlier.
    pub async fn run<I, T, F, Fut>(&self, items: &[I], mut launch: F) -> BatchRun<T>
    where
        F: FnMut(&I) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let total = self.batch_count(items.len());
        let mut outcomes: Vec<Option<T>> = Vec::with_capacity(items.len());

        for (batch_index, chunk) in items.chunks(self.batch_size).enumerate() {
            if batch_index > 0 && !self.cooldown.is_zero() {
                debug!("Cooling down for {}ms", self.cooldown.as_millis());
                tokio::time::sleep(self.cooldown).await;
            }

            info!(
                "Batch {}/{}: launching {} tasks",
                batch_index + 1,
                total,
                chunk.len()
            );

            let offset = outcomes.len();
            outcomes.extend(chunk.iter().map(|_| None));

            let mut set = JoinSet::new();
            for (i, item) in chunk.iter().enumerate() {
                let task = launch(item);
                set.spawn(async move { (offset + i, task.await) });
            }

            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok((index, value)) => outcomes[index] = Some(value),
                    Err(e) => warn!("Task in batch {} did not complete: {}", batch_index + 1, e),
                }
            }

            debug!("Batch {}/{} finished", batch_index + 1, total);
        }

        BatchRun {
            outcomes,
            batches: total,
        }
    }
}
