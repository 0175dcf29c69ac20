//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::BulkReport;
use crate::domain::errors::BulkError;
use crate::domain::selection::Selection;
use async_trait::async_trait;

/// Primary Bulk Operations API
///
/// Writes are issued one at a time, each awaited before the next. The first
/// failure aborts the loop; earlier writes stay applied. On success the
/// selection is cleared and the article cache invalidated.
#[async_trait]
pub trait BulkOperationsApi: Send + Sync {
    /// Publish every selected article. Privileged only.
    async fn bulk_publish(&self, selection: &mut Selection) -> Result<BulkReport, BulkError>;

    /// Delete every selected article. No privilege check.
    async fn bulk_delete(&self, selection: &mut Selection) -> Result<BulkReport, BulkError>;
}
