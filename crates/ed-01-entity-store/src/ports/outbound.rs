//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::StoreError;
use crate::domain::record::{record_id, Record, SortKey};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Generic entity store client.
///
/// Every operation names its collection; nothing is hard-coded per call.
/// Implementations provide per-record atomicity only.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// List every record in a collection. The sort key is passed through to
    /// the store; callers that need a specific order re-sort themselves.
    async fn list(
        &self,
        collection: &str,
        sort: Option<&SortKey>,
    ) -> Result<Vec<Record>, StoreError>;

    /// Create a record. Returns it with its assigned `id`.
    async fn create(&self, collection: &str, record: Record) -> Result<Record, StoreError>;

    /// Merge `partial` into the record with `id`. Returns the updated record.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Record,
    ) -> Result<Record, StoreError>;

    /// Delete the record with `id`. There is no soft delete.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Fetch the records whose ids appear in `ids`.
    ///
    /// The default lists the whole collection and filters client-side. Stores
    /// with a native id lookup should override it.
    async fn list_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<Record>, StoreError> {
        debug!(
            collection,
            requested = ids.len(),
            "No native id lookup, listing full collection"
        );
        let records = self.list(collection, None).await?;
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(records
            .into_iter()
            .filter(|record| record_id(record).is_some_and(|id| wanted.contains(id)))
            .collect())
    }
}
