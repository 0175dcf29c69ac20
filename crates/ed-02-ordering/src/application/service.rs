//! Ordering Service
//!
//! Main service implementing OrderingApi.

use crate::algorithms::view;
use crate::config::OrderingConfig;
use crate::domain::entities::{CommitReport, ReorderSession, WorkingCopy};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{CategoryFilter, Direction, StatusFilter};
use crate::ports::inbound::OrderingApi;
use async_trait::async_trait;
use ed_01_entity_store::{ArticleCache, ArticlePatch};
use futures::future::join_all;
use parking_lot::Mutex;
use shared_types::Article;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Default)]
struct SessionSlot {
    /// Bumped whenever a session opens or closes
    seq: u64,
    session: Option<ReorderSession>,
}

/// Ordering Service
///
/// Reads through the shared article cache and writes order updates through
/// its repository. Holds at most one reorder session.
pub struct OrderingService {
    cache: Arc<ArticleCache>,
    config: OrderingConfig,
    slot: Mutex<SessionSlot>,
}

impl OrderingService {
    pub fn new(cache: Arc<ArticleCache>) -> Self {
        Self::with_config(cache, OrderingConfig::default())
    }

    pub fn with_config(cache: Arc<ArticleCache>, config: OrderingConfig) -> Self {
        Self {
            cache,
            config,
            slot: Mutex::new(SessionSlot::default()),
        }
    }

    pub fn is_reordering(&self) -> bool {
        self.slot.lock().session.is_some()
    }

    /// Filters of the open session, if any.
    pub fn session_filters(&self) -> Option<(CategoryFilter, StatusFilter)> {
        self.slot
            .lock()
            .session
            .as_ref()
            .map(|session| (session.category, session.status))
    }

    fn edit<F>(&self, apply: F) -> Result<WorkingCopy, OrderingError>
    where
        F: FnOnce(&mut WorkingCopy) -> bool,
    {
        let mut slot = self.slot.lock();
        let session = slot.session.as_mut().ok_or(OrderingError::NoSession)?;
        if !apply(&mut session.working) {
            debug!("Reorder gesture ignored");
        }
        Ok(session.working.clone())
    }

    fn close_session(&self, seq: u64) {
        let mut slot = self.slot.lock();
        if slot.seq == seq {
            slot.session = None;
            slot.seq += 1;
        }
    }
}

#[async_trait]
impl OrderingApi for OrderingService {
    async fn current_view(
        &self,
        category: CategoryFilter,
        status: StatusFilter,
    ) -> Result<Vec<Article>, OrderingError> {
        let articles = self.cache.articles().await?;
        Ok(view(&articles, category, status))
    }

    async fn begin_reorder(
        &self,
        category: CategoryFilter,
        status: StatusFilter,
    ) -> Result<WorkingCopy, OrderingError> {
        let snapshot = self.current_view(category, status).await?;
        let session = ReorderSession::new(category, status, snapshot);
        let working = session.working.clone();

        let mut slot = self.slot.lock();
        if slot.session.is_some() {
            warn!("Discarding open reorder session");
        }
        slot.session = Some(session);
        slot.seq += 1;

        info!(%category, %status, count = working.len(), "Reorder session opened");
        Ok(working)
    }

    fn move_item(&self, from: usize, to: Option<usize>) -> Result<WorkingCopy, OrderingError> {
        self.edit(|working| working.move_item(from, to))
    }

    fn nudge(&self, index: usize, direction: Direction) -> Result<WorkingCopy, OrderingError> {
        self.edit(|working| working.nudge(index, direction))
    }

    async fn commit(&self) -> Result<CommitReport, OrderingError> {
        let (seq, updates) = {
            let slot = self.slot.lock();
            let session = slot.session.as_ref().ok_or(OrderingError::NoSession)?;
            (slot.seq, session.working.order_updates())
        };

        if updates.is_empty() {
            info!("Nothing to reorder; closing session");
            self.close_session(seq);
            return Ok(CommitReport::default());
        }

        let total = updates.len();
        debug!(count = total, "Committing order updates");

        let repository = self.cache.repository();
        let results = join_all(updates.iter().map(|update| async move {
            repository
                .update_article(&update.id, ArticlePatch::order(update.order))
                .await
                .map_err(|e| (update.id.clone(), e))
        }))
        .await;

        let failures: Vec<_> = results.into_iter().filter_map(Result::err).collect();
        let Some((first_id, first)) = failures.first().cloned() else {
            self.close_session(seq);
            self.cache.invalidate("reorder committed");
            info!(count = total, "Reorder committed");
            return Ok(CommitReport { written: total });
        };

        let failed = failures.len();
        if failed < total && self.config.invalidate_on_partial_commit {
            self.cache.invalidate("reorder partially committed");
        }
        for (id, error) in &failures {
            warn!(article_id = %id, error = %error, "Order update rejected");
        }
        warn!(
            failed,
            total,
            first_failure = %first_id,
            "Reorder commit failed; applied updates are not rolled back"
        );
        Err(OrderingError::PartialCommit {
            failed,
            total,
            first,
        })
    }

    fn cancel(&self) -> bool {
        let mut slot = self.slot.lock();
        if slot.session.take().is_none() {
            return false;
        }
        slot.seq += 1;
        drop(slot);

        if self.config.invalidate_on_cancel {
            self.cache.invalidate("reorder cancelled");
        }
        info!("Reorder session cancelled");
        true
    }

    fn working_copy(&self) -> Option<WorkingCopy> {
        self.slot
            .lock()
            .session
            .as_ref()
            .map(|session| session.working.clone())
    }
}
