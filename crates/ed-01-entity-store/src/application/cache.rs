//! Shared article listing cache.
//!
//! Every engine reads the full article collection through one [`ArticleCache`]
//! and invalidates it after a successful mutation. The next read refetches.

use super::repository::ArticleRepository;
use crate::domain::errors::StoreError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::Article;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Notification published whenever the cached listing changes state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheEvent {
    /// The snapshot was dropped; `reason` names the mutation that caused it.
    Invalidated { reason: String, generation: u64 },
    /// A fresh snapshot was loaded from the store. `skipped` counts records
    /// left out because they did not decode.
    Refreshed {
        generation: u64,
        count: usize,
        skipped: usize,
    },
}

#[derive(Default)]
struct CacheState {
    snapshot: Option<Arc<Vec<Article>>>,
    generation: u64,
}

/// Read-through cache of the full article collection.
pub struct ArticleCache {
    repository: ArticleRepository,
    state: RwLock<CacheState>,
    events: broadcast::Sender<CacheEvent>,
}

impl ArticleCache {
    pub fn new(repository: ArticleRepository) -> Self {
        let capacity = repository.config().cache_event_capacity.max(1);
        let (events, _) = broadcast::channel(capacity);
        Self {
            repository,
            state: RwLock::new(CacheState::default()),
            events,
        }
    }

    pub fn repository(&self) -> &ArticleRepository {
        &self.repository
    }

    /// The full article collection, fetched on first use after invalidation.
    pub async fn articles(&self) -> Result<Arc<Vec<Article>>, StoreError> {
        let generation = {
            let state = self.state.read();
            if let Some(snapshot) = &state.snapshot {
                return Ok(Arc::clone(snapshot));
            }
            state.generation
        };

        let listing = self.repository.load_articles().await?;
        let skipped = listing.skipped.len();
        let fresh = Arc::new(listing.articles);

        let mut state = self.state.write();
        // An invalidation landed while we were fetching; hand the caller the
        // fresh data but do not install it.
        if state.generation != generation {
            debug!(
                fetched_at = generation,
                current = state.generation,
                "Discarding stale article listing"
            );
            return Ok(fresh);
        }
        state.snapshot = Some(Arc::clone(&fresh));
        drop(state);

        debug!(generation, count = fresh.len(), skipped, "Article listing refreshed");
        let _ = self.events.send(CacheEvent::Refreshed {
            generation,
            count: fresh.len(),
            skipped,
        });
        Ok(fresh)
    }

    /// Drop the cached listing so the next read refetches.
    pub fn invalidate(&self, reason: &str) {
        let generation = {
            let mut state = self.state.write();
            state.snapshot = None;
            state.generation += 1;
            state.generation
        };
        info!(reason, generation, "Article cache invalidated");
        // No subscribers is fine.
        let _ = self.events.send(CacheEvent::Invalidated {
            reason: reason.to_string(),
            generation,
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }

    /// Number of invalidations so far.
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    pub fn is_warm(&self) -> bool {
        self.state.read().snapshot.is_some()
    }
}
