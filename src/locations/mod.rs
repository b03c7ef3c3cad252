use crate::errors::AcquireError;
use crate::locations::models::Location;
use crate::wikidata::WikidataApi;
use std::collections::VecDeque;
use tokio::sync::mpsc;

pub mod consts;
pub mod curated;
pub mod models;

/// Hands out one target location per round.
///
/// The first round is always served from the curated list so the game starts
/// instantly; that same call kicks off a background batch prefetch. Later
/// rounds drain the prefetched pool and fall back to a single remote lookup
/// when the pool runs dry.
pub struct LocationSource<W> {
    client: W,
    curated_only: bool,
    prefetch_size: usize,
    pool: VecDeque<Location>,
    prefetch_tx: mpsc::UnboundedSender<Vec<Location>>,
    prefetch_rx: mpsc::UnboundedReceiver<Vec<Location>>,
    prefetch_in_flight: bool,
}

impl<W> LocationSource<W>
where
    W: WikidataApi + Clone,
{
    pub fn new(client: W, prefetch_size: usize, curated_only: bool) -> Self {
        let (prefetch_tx, prefetch_rx) = mpsc::unbounded_channel();
        Self {
            client,
            curated_only,
            prefetch_size,
            pool: VecDeque::new(),
            prefetch_tx,
            prefetch_rx,
            prefetch_in_flight: false,
        }
    }

    pub async fn next_location(&mut self, round: u64) -> Result<Location, AcquireError> {
        self.absorb_prefetched();
        if self.curated_only {
            return Ok(curated::random());
        }
        if round == 1 {
            self.start_prefetch();
            return Ok(curated::random());
        }
        if let Some(location) = self.pool.pop_front() {
            tracing::debug!(name = %location.name, "Serving a prefetched location from the pool.");
            return Ok(location);
        }
        self.start_prefetch();
        let mut batch = self.client.random_locations(1).await?;
        batch.pop().ok_or_else(|| {
            AcquireError::LocationUnavailable(String::from("the lookup returned no candidates"))
        })
    }

    /// Forgets pooled locations. An in-flight prefetch keeps running; whatever
    /// it brings back lands in the pool of the next game.
    pub fn clear_pool(&mut self) {
        self.pool.clear();
    }

    fn absorb_prefetched(&mut self) {
        while let Ok(batch) = self.prefetch_rx.try_recv() {
            self.prefetch_in_flight = false;
            tracing::debug!(count = batch.len(), "Absorbed a prefetched location batch.");
            self.pool.extend(batch);
        }
    }

    fn start_prefetch(&mut self) {
        if self.prefetch_in_flight {
            return;
        }
        self.prefetch_in_flight = true;
        let client = self.client.clone();
        let limit = self.prefetch_size;
        let tx = self.prefetch_tx.clone();
        tokio::spawn(async move {
            let batch = match client.random_locations(limit).await {
                Ok(batch) => batch,
                Err(error) => {
                    tracing::warn!(%error, "Background location prefetch failed.");
                    Vec::new()
                }
            };
            // The receiving side may be gone if the game ended. Nothing to do then.
            let _ = tx.send(batch);
        });
    }
}
