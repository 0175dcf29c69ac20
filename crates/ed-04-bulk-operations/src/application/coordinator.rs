//! Bulk Operation Coordinator
//!
//! Main service implementing BulkOperationsApi.

use crate::config::BulkConfig;
use crate::domain::entities::{BulkAction, BulkReport};
use crate::domain::errors::BulkError;
use crate::domain::selection::Selection;
use crate::ports::inbound::BulkOperationsApi;
use async_trait::async_trait;
use ed_01_entity_store::{ArticleCache, ArticlePatch, StoreError};
use ed_03_lifecycle::{ActorProvider, PrivilegePolicy};
use shared_types::{ArticleId, Clock};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Bulk Operation Coordinator
///
/// Applies publish or delete across a [`Selection`], sequentially.
pub struct BulkOperationCoordinator {
    cache: Arc<ArticleCache>,
    actors: Arc<dyn ActorProvider>,
    clock: Arc<dyn Clock>,
    policy: PrivilegePolicy,
    config: BulkConfig,
}

impl BulkOperationCoordinator {
    pub fn new(
        cache: Arc<ArticleCache>,
        actors: Arc<dyn ActorProvider>,
        clock: Arc<dyn Clock>,
        policy: PrivilegePolicy,
    ) -> Self {
        Self::with_config(cache, actors, clock, policy, BulkConfig::default())
    }

    pub fn with_config(
        cache: Arc<ArticleCache>,
        actors: Arc<dyn ActorProvider>,
        clock: Arc<dyn Clock>,
        policy: PrivilegePolicy,
        config: BulkConfig,
    ) -> Self {
        Self {
            cache,
            actors,
            clock,
            policy,
            config,
        }
    }

    fn require_selection(action: BulkAction, selection: &Selection) -> Result<(), BulkError> {
        if selection.is_empty() {
            warn!(%action, "Bulk operation with empty selection");
            return Err(BulkError::EmptySelection { action });
        }
        Ok(())
    }

    fn abort(
        &self,
        action: BulkAction,
        applied: usize,
        total: usize,
        failed_id: &ArticleId,
        source: StoreError,
    ) -> BulkError {
        error!(
            %action,
            article_id = %failed_id,
            applied,
            total,
            error = %source,
            "Bulk operation aborted; applied writes are not rolled back"
        );
        if applied > 0 && self.config.invalidate_on_abort {
            self.cache.invalidate("bulk operation aborted");
        }
        BulkError::Aborted {
            action,
            applied,
            total,
            failed_id: failed_id.clone(),
            source,
        }
    }

    fn finish(&self, selection: &mut Selection, report: BulkReport) -> BulkReport {
        selection.clear();
        self.cache.invalidate(match report.action {
            BulkAction::Publish => "bulk publish",
            BulkAction::Delete => "bulk delete",
        });
        info!(
            action = %report.action,
            applied = report.applied,
            skipped = report.skipped.len(),
            "Bulk operation completed"
        );
        report
    }
}

#[async_trait]
impl BulkOperationsApi for BulkOperationCoordinator {
    async fn bulk_publish(&self, selection: &mut Selection) -> Result<BulkReport, BulkError> {
        let action = BulkAction::Publish;
        let actor = self.actors.current_actor();
        if !self.policy.is_privileged(&actor) {
            warn!(identity = %actor.identity, "Bulk publish denied");
            return Err(BulkError::PermissionDenied {
                action,
                identity: actor.identity,
            });
        }
        Self::require_selection(action, selection)?;

        let repository = self.cache.repository();
        let targets = repository.list_articles_by_ids(selection.ids()).await?;
        let skipped: Vec<ArticleId> = selection
            .ids()
            .iter()
            .filter(|id| !targets.iter().any(|article| &article.id == *id))
            .cloned()
            .collect();
        if !skipped.is_empty() {
            debug!(count = skipped.len(), "Selected articles no longer in store");
        }

        let requested = selection.len();
        let today = self.clock.today();
        let total = targets.len();
        for (applied, article) in targets.into_iter().enumerate() {
            let mut next = article;
            next.mark_published(today);
            let patch = ArticlePatch::full(&next)?;
            if let Err(e) = repository.update_article(&next.id, patch).await {
                return Err(self.abort(action, applied, total, &next.id, e));
            }
        }

        Ok(self.finish(
            selection,
            BulkReport {
                action,
                requested,
                applied: total,
                skipped,
            },
        ))
    }

    async fn bulk_delete(&self, selection: &mut Selection) -> Result<BulkReport, BulkError> {
        let action = BulkAction::Delete;
        Self::require_selection(action, selection)?;

        let repository = self.cache.repository();
        let total = selection.len();
        for (applied, id) in selection.ids().iter().enumerate() {
            if let Err(e) = repository.delete_article(id).await {
                return Err(self.abort(action, applied, total, id, e));
            }
        }

        Ok(self.finish(
            selection,
            BulkReport {
                action,
                requested: total,
                applied: total,
                skipped: Vec::new(),
            },
        ))
    }
}
