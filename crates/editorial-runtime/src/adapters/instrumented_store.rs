//! Entity store decorator recording Prometheus metrics and logging failures.

use async_trait::async_trait;
use ed_01_entity_store::{EntityStore, Record, SortKey, StoreError};
use editorial_telemetry::record_store_call;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

/// Wraps any [`EntityStore`], timing every request.
///
/// `list_by_ids` is forwarded as-is so the inner store's native lookup (or
/// its full-listing fallback) is preserved.
pub struct InstrumentedStore {
    inner: Arc<dyn EntityStore>,
}

impl InstrumentedStore {
    pub fn new(inner: Arc<dyn EntityStore>) -> Self {
        Self { inner }
    }

    async fn observe<T, F>(
        operation: &'static str,
        collection: &str,
        call: F,
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let started = Instant::now();
        let result = call.await;
        record_store_call(operation, result.is_ok(), started.elapsed().as_secs_f64());
        if let Err(e) = &result {
            error!(operation, collection, error = %e, "Store request failed");
        }
        result
    }
}

#[async_trait]
impl EntityStore for InstrumentedStore {
    async fn list(
        &self,
        collection: &str,
        sort: Option<&SortKey>,
    ) -> Result<Vec<Record>, StoreError> {
        Self::observe("list", collection, self.inner.list(collection, sort)).await
    }

    async fn list_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<Record>, StoreError> {
        Self::observe(
            "list_by_ids",
            collection,
            self.inner.list_by_ids(collection, ids),
        )
        .await
    }

    async fn create(&self, collection: &str, record: Record) -> Result<Record, StoreError> {
        Self::observe("create", collection, self.inner.create(collection, record)).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Record,
    ) -> Result<Record, StoreError> {
        Self::observe(
            "update",
            collection,
            self.inner.update(collection, id, partial),
        )
        .await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        Self::observe("delete", collection, self.inner.delete(collection, id)).await
    }
}
