//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{CommitReport, WorkingCopy};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{CategoryFilter, Direction, StatusFilter};
use async_trait::async_trait;
use shared_types::Article;

/// Primary Ordering API
///
/// At most one reorder session is open at a time. Filters cannot change
/// while it is open; callers hide them until commit or cancel.
#[async_trait]
pub trait OrderingApi: Send + Sync {
    /// Filtered view of the cached collection, ascending by order.
    async fn current_view(
        &self,
        category: CategoryFilter,
        status: StatusFilter,
    ) -> Result<Vec<Article>, OrderingError>;

    /// Open a reorder session over the current view and return its copy.
    ///
    /// An already open session is discarded.
    async fn begin_reorder(
        &self,
        category: CategoryFilter,
        status: StatusFilter,
    ) -> Result<WorkingCopy, OrderingError>;

    /// Relocate one article in the open session's copy.
    fn move_item(&self, from: usize, to: Option<usize>) -> Result<WorkingCopy, OrderingError>;

    /// Move one article a single slot in the open session's copy.
    fn nudge(&self, index: usize, direction: Direction) -> Result<WorkingCopy, OrderingError>;

    /// Persist the copy's order values, one concurrent update per article.
    ///
    /// On success the session closes and the cache is invalidated. On
    /// failure the session stays open; succeeded writes are not rolled back.
    async fn commit(&self) -> Result<CommitReport, OrderingError>;

    /// Discard the open session. Returns whether one was open.
    fn cancel(&self) -> bool;

    /// Snapshot of the open session's copy, if any.
    fn working_copy(&self) -> Option<WorkingCopy>;
}
