//! # Batch Concurrency
//!
//! A reorder commit sends all of its order updates at once. Bulk operations
//! await each write before issuing the next. The in-memory store never
//! yields, so these flows put a slow store in front of it and track how many
//! writes are in flight at the same time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ed_01_entity_store::{EntityStore, Record, SortKey, StoreError};
use ed_02_ordering::{CategoryFilter, StatusFilter};
use ed_04_bulk_operations::Selection;
use serde_json::json;
use shared_types::ArticleId;

use super::fixtures::*;

const WRITE_LATENCY: Duration = Duration::from_millis(20);

#[derive(Default)]
struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlight {
    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// Delays every write and records the peak number of concurrent writes.
struct SlowWrites {
    inner: Arc<dyn EntityStore>,
    writes: Arc<InFlight>,
}

impl SlowWrites {
    async fn delayed<T>(
        &self,
        call: impl std::future::Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        let now = self.writes.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.writes.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(WRITE_LATENCY).await;
        let result = call.await;
        self.writes.current.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

#[async_trait]
impl EntityStore for SlowWrites {
    async fn list(
        &self,
        collection: &str,
        sort: Option<&SortKey>,
    ) -> Result<Vec<Record>, StoreError> {
        self.inner.list(collection, sort).await
    }

    async fn create(&self, collection: &str, record: Record) -> Result<Record, StoreError> {
        self.delayed(self.inner.create(collection, record)).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Record,
    ) -> Result<Record, StoreError> {
        self.delayed(self.inner.update(collection, id, partial)).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.delayed(self.inner.delete(collection, id)).await
    }

    async fn list_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<Record>, StoreError> {
        self.inner.list_by_ids(collection, ids).await
    }
}

fn five_drafts() -> Vec<serde_json::Value> {
    (1..=5)
        .map(|i| json!({"id": format!("d{i}"), "category": "Art", "status": "draft", "order": i}))
        .collect()
}

fn slow_harness(actor: shared_types::Actor) -> (Harness, Arc<InFlight>) {
    let writes = Arc::new(InFlight::default());
    let tracked = Arc::clone(&writes);
    let harness = Harness::wrapped(five_drafts(), actor, move |inner| {
        let slow: Arc<dyn EntityStore> = Arc::new(SlowWrites {
            inner,
            writes: tracked,
        });
        slow
    });
    (harness, writes)
}

fn all_drafts() -> Selection {
    (1..=5).map(|i| ArticleId::from(format!("d{i}"))).collect()
}

#[tokio::test]
async fn test_reorder_commit_sends_updates_concurrently() {
    let (h, writes) = slow_harness(writer());
    h.console
        .begin_reorder(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    h.console.move_item(4, Some(0)).unwrap();

    let report = h.console.commit_reorder().await.unwrap();

    assert_eq!(report.written, 5);
    assert_eq!(writes.peak(), 5);
    assert_eq!(h.stored_order("d5"), Some(0));
}

#[tokio::test]
async fn test_bulk_publish_writes_one_at_a_time() {
    let (h, writes) = slow_harness(owner());

    let report = h.console.bulk_publish(&mut all_drafts()).await.unwrap();

    assert_eq!(report.applied, 5);
    assert_eq!(writes.peak(), 1);
}

#[tokio::test]
async fn test_bulk_delete_writes_one_at_a_time() {
    let (h, writes) = slow_harness(writer());

    let report = h.console.bulk_delete(&mut all_drafts()).await.unwrap();

    assert_eq!(report.applied, 5);
    assert_eq!(writes.peak(), 1);
    assert!(h.store.records("Article").is_empty());
}
