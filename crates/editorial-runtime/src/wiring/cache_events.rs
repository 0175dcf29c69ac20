//! Cache event listener.
//!
//! Counts invalidations and skipped records in the metrics registry and logs
//! every refresh. The task ends when the cache (and with it the sender) is
//! dropped.

use ed_01_entity_store::{ArticleCache, CacheEvent};
use editorial_telemetry::{metric_inc, CACHE_INVALIDATIONS, RECORDS_SKIPPED};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Subscribe to `cache` and handle its events on a spawned task.
pub fn spawn_cache_listener(cache: &ArticleCache) -> JoinHandle<usize> {
    let receiver = cache.subscribe();
    tokio::spawn(listen(receiver))
}

/// Returns the number of events handled.
async fn listen(mut receiver: broadcast::Receiver<CacheEvent>) -> usize {
    let mut handled = 0;
    loop {
        match receiver.recv().await {
            Ok(CacheEvent::Invalidated { reason, generation }) => {
                metric_inc!(CACHE_INVALIDATIONS);
                info!(%reason, generation, "Article listing invalidated");
                handled += 1;
            }
            Ok(CacheEvent::Refreshed {
                generation,
                count,
                skipped,
            }) => {
                if skipped > 0 {
                    RECORDS_SKIPPED.inc_by(skipped as u64);
                    warn!(
                        generation,
                        skipped, "Article listing reloaded without malformed records"
                    );
                }
                debug!(generation, count, "Article listing reloaded");
                handled += 1;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(skipped = n, "Cache listener lagged");
            }
            Err(broadcast::error::RecvError::Closed) => {
                info!(handled, "Cache event channel closed, exiting");
                break;
            }
        }
    }
    handled
}
