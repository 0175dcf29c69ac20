//! # Editorial Console
//!
//! One object per signed-in console: the shared article cache, the three
//! engines built over it, and the actor provider they all consult.
//!
//! ## Initialization Order
//!
//! ```text
//! EntityStore ──► InstrumentedStore ──► ArticleRepository ──► ArticleCache
//!                                                                 │
//!                        ┌────────────────────┬───────────────────┤
//!                        ▼                    ▼                   ▼
//!                 OrderingService     LifecycleService   BulkOperationCoordinator
//! ```
//!
//! Every facade method forwards to its engine and records the outcome in the
//! Prometheus registry. The engines themselves never touch telemetry.

use std::sync::Arc;

use ed_01_entity_store::{
    ArticleCache, ArticleRepository, EntityStore, ReferenceDirectory, StoreError,
};
use ed_02_ordering::{
    status_filter_options, CategoryFilter, CommitReport, Direction, OrderingApi, OrderingError,
    OrderingService, StatusFilter, WorkingCopy,
};
use ed_03_lifecycle::{ActorProvider, LifecycleApi, LifecycleError, LifecycleService, StaticActor};
use ed_04_bulk_operations::{
    BulkError, BulkOperationCoordinator, BulkOperationsApi, BulkReport, Selection,
};
use editorial_telemetry::{
    metric_inc, BULK_OPERATIONS, ENGINE_ERRORS, LIFECYCLE_TRANSITIONS, REORDER_COMMITS,
};
use shared_types::{Actor, Article, ArticleDraft, ArticleId, Clock, ErrorKind};
use tracing::{info, instrument};

use crate::adapters::InstrumentedStore;
use crate::container::config::RuntimeConfig;

/// Status label recorded for a delete.
const DELETED: &str = "deleted";

fn record_error(kind: ErrorKind) {
    metric_inc!(ENGINE_ERRORS, &[kind.as_str()]);
}

/// Facade over every engine of one console.
pub struct EditorialConsole {
    config: RuntimeConfig,
    cache: Arc<ArticleCache>,
    actors: Arc<StaticActor>,
    ordering: OrderingService,
    lifecycle: LifecycleService,
    bulk: BulkOperationCoordinator,
}

impl EditorialConsole {
    /// Wire the engines over `store`, signed in as `actor`.
    pub fn build(
        config: RuntimeConfig,
        store: Arc<dyn EntityStore>,
        actor: Actor,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!(identity = %actor.identity, "Building editorial console");

        let store: Arc<dyn EntityStore> = Arc::new(InstrumentedStore::new(store));
        let repository = ArticleRepository::new(store, config.store.clone());
        let cache = Arc::new(ArticleCache::new(repository));
        let actors = Arc::new(StaticActor::new(actor));
        let provider: Arc<dyn ActorProvider> = actors.clone();

        let ordering = OrderingService::with_config(Arc::clone(&cache), config.ordering.clone());
        let lifecycle = LifecycleService::new(
            Arc::clone(&cache),
            Arc::clone(&provider),
            Arc::clone(&clock),
            config.lifecycle.clone(),
        );
        let bulk = BulkOperationCoordinator::with_config(
            Arc::clone(&cache),
            provider,
            clock,
            config.lifecycle.privilege.clone(),
            config.bulk.clone(),
        );

        Self {
            config,
            cache,
            actors,
            ordering,
            lifecycle,
            bulk,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<ArticleCache> {
        &self.cache
    }

    pub fn ordering(&self) -> &OrderingService {
        &self.ordering
    }

    pub fn lifecycle(&self) -> &LifecycleService {
        &self.lifecycle
    }

    pub fn bulk(&self) -> &BulkOperationCoordinator {
        &self.bulk
    }

    // =========================================================================
    // ACTOR
    // =========================================================================

    pub fn actor(&self) -> Actor {
        self.actors.current_actor()
    }

    /// Switch the signed-in actor. Privilege is re-evaluated on every call.
    pub fn sign_in(&self, actor: Actor) {
        info!(identity = %actor.identity, "Actor signed in");
        self.actors.sign_in(actor);
    }

    pub fn is_privileged(&self) -> bool {
        self.lifecycle.is_privileged()
    }

    /// Status filters offered to the current actor.
    pub fn status_filter_options(&self) -> Vec<StatusFilter> {
        status_filter_options(self.is_privileged())
    }

    /// Team and tag lookups for display.
    pub async fn references(&self) -> Result<ReferenceDirectory, StoreError> {
        ReferenceDirectory::load(self.cache.repository())
            .await
            .inspect_err(|e| record_error(e.kind()))
    }

    // =========================================================================
    // ORDERING
    // =========================================================================

    pub async fn view(
        &self,
        category: CategoryFilter,
        status: StatusFilter,
    ) -> Result<Vec<Article>, OrderingError> {
        self.ordering
            .current_view(category, status)
            .await
            .inspect_err(|e| record_error(e.kind()))
    }

    pub fn is_reordering(&self) -> bool {
        self.ordering.is_reordering()
    }

    pub async fn begin_reorder(
        &self,
        category: CategoryFilter,
        status: StatusFilter,
    ) -> Result<WorkingCopy, OrderingError> {
        self.ordering
            .begin_reorder(category, status)
            .await
            .inspect_err(|e| record_error(e.kind()))
    }

    pub fn move_item(&self, from: usize, to: Option<usize>) -> Result<WorkingCopy, OrderingError> {
        self.ordering
            .move_item(from, to)
            .inspect_err(|e| record_error(e.kind()))
    }

    pub fn nudge(&self, index: usize, direction: Direction) -> Result<WorkingCopy, OrderingError> {
        self.ordering
            .nudge(index, direction)
            .inspect_err(|e| record_error(e.kind()))
    }

    pub fn working_copy(&self) -> Option<WorkingCopy> {
        self.ordering.working_copy()
    }

    #[instrument(skip(self))]
    pub async fn commit_reorder(&self) -> Result<CommitReport, OrderingError> {
        let result = self.ordering.commit().await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(OrderingError::PartialCommit { .. }) => "partial",
            Err(OrderingError::NoSession) => "no_session",
            Err(OrderingError::Store(_)) => "failed",
        };
        metric_inc!(REORDER_COMMITS, &[outcome]);
        result.inspect_err(|e| record_error(e.kind()))
    }

    pub fn cancel_reorder(&self) -> bool {
        self.ordering.cancel()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    pub async fn create(&self, draft: ArticleDraft) -> Result<Article, LifecycleError> {
        let result = self.lifecycle.create(draft).await;
        Self::record_transition("create", result.as_ref().map(|a| a.status.as_str()));
        result
    }

    pub async fn update(
        &self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> Result<Article, LifecycleError> {
        let result = self.lifecycle.update(id, draft).await;
        Self::record_transition("update", result.as_ref().map(|a| a.status.as_str()));
        result
    }

    pub async fn publish(&self, article: &Article) -> Result<Article, LifecycleError> {
        let result = self.lifecycle.publish(article).await;
        Self::record_transition("publish", result.as_ref().map(|a| a.status.as_str()));
        result
    }

    pub async fn delete(&self, id: &ArticleId) -> Result<(), LifecycleError> {
        let result = self.lifecycle.delete(id).await;
        Self::record_transition("delete", result.as_ref().map(|_| DELETED));
        result
    }

    fn record_transition(operation: &str, result: Result<&str, &LifecycleError>) {
        match result {
            Ok(status) => metric_inc!(LIFECYCLE_TRANSITIONS, &[operation, status]),
            Err(e) => record_error(e.kind()),
        }
    }

    // =========================================================================
    // BULK
    // =========================================================================

    pub async fn bulk_publish(&self, selection: &mut Selection) -> Result<BulkReport, BulkError> {
        let result = self.bulk.bulk_publish(selection).await;
        Self::record_bulk("publish", &result);
        result
    }

    pub async fn bulk_delete(&self, selection: &mut Selection) -> Result<BulkReport, BulkError> {
        let result = self.bulk.bulk_delete(selection).await;
        Self::record_bulk("delete", &result);
        result
    }

    fn record_bulk(action: &str, result: &Result<BulkReport, BulkError>) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(BulkError::Aborted { .. }) => "aborted",
            Err(BulkError::EmptySelection { .. } | BulkError::PermissionDenied { .. }) => {
                "rejected"
            }
            Err(BulkError::Store(_)) => "failed",
        };
        metric_inc!(BULK_OPERATIONS, &[action, outcome]);
        if let Err(e) = result {
            record_error(e.kind());
        }
    }
}
