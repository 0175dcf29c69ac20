//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::LifecycleError;
use async_trait::async_trait;
use shared_types::{Article, ArticleDraft, ArticleId};

/// Primary Lifecycle API
///
/// Every successful call invalidates the shared article cache.
#[async_trait]
pub trait LifecycleApi: Send + Sync {
    /// Whether the current actor is privileged.
    fn is_privileged(&self) -> bool;

    /// Create an article from a draft.
    ///
    /// The requested status passes through the transition table. The new
    /// article gets an article code and sorts last in the full collection.
    async fn create(&self, draft: ArticleDraft) -> Result<Article, LifecycleError>;

    /// Overwrite an article's editable fields. Never changes `order`.
    async fn update(
        &self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> Result<Article, LifecycleError>;

    /// Publish an article. Privileged only.
    ///
    /// Sends the full payload with `status = published` and a
    /// `published_date` stamped only if absent.
    async fn publish(&self, article: &Article) -> Result<Article, LifecycleError>;

    /// Delete an article. No privilege check.
    async fn delete(&self, id: &ArticleId) -> Result<(), LifecycleError>;
}
