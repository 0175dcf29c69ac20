//! Lifecycle Service
//!
//! Main service implementing LifecycleApi.

use crate::config::LifecycleConfig;
use crate::domain::code::article_code;
use crate::domain::errors::LifecycleError;
use crate::domain::transitions::Transition;
use crate::ports::inbound::LifecycleApi;
use crate::ports::outbound::ActorProvider;
use async_trait::async_trait;
use ed_01_entity_store::{ArticleCache, ArticlePatch};
use ed_02_ordering::next_order;
use shared_types::{Actor, Article, ArticleDraft, ArticleId, Clock, NewArticle};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle Service
///
/// Orchestrates every single-article mutation:
/// 1. Resolve the actor's privilege
/// 2. Pass the requested status through the transition table
/// 3. Write through the repository
/// 4. Invalidate the article cache
pub struct LifecycleService {
    cache: Arc<ArticleCache>,
    actors: Arc<dyn ActorProvider>,
    clock: Arc<dyn Clock>,
    config: LifecycleConfig,
}

impl LifecycleService {
    pub fn new(
        cache: Arc<ArticleCache>,
        actors: Arc<dyn ActorProvider>,
        clock: Arc<dyn Clock>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            cache,
            actors,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    fn privileged(&self, actor: &Actor) -> bool {
        self.config.privilege.is_privileged(actor)
    }

    /// Apply the transition table to a draft, stamping `published_date` when
    /// the draft ends up published without one.
    fn settle_status(&self, draft: &mut ArticleDraft, actor: &Actor) -> Transition {
        let transition = Transition::resolve(draft.status, self.privileged(actor));
        if transition.downgraded() {
            info!(
                identity = %actor.identity,
                requested = %transition.requested,
                effective = %transition.effective,
                "Publish request downgraded to approval"
            );
        }
        draft.status = transition.effective;
        if transition.publishes() && draft.published_date.is_none() {
            draft.published_date = Some(self.clock.today());
        }
        transition
    }
}

#[async_trait]
impl LifecycleApi for LifecycleService {
    fn is_privileged(&self) -> bool {
        self.privileged(&self.actors.current_actor())
    }

    async fn create(&self, mut draft: ArticleDraft) -> Result<Article, LifecycleError> {
        let actor = self.actors.current_actor();
        let transition = self.settle_status(&mut draft, &actor);

        let collection = self.cache.articles().await?;
        let order = next_order(&collection);
        let code = article_code(
            &self.config.code_prefix,
            self.clock.now(),
            &mut rand::thread_rng(),
        );
        debug!(order, code = %code, "Assigned order and article code");

        let created = self
            .cache
            .repository()
            .create_article(&NewArticle { code, order, draft })
            .await?;
        self.cache.invalidate("article created");

        info!(
            article_id = %created.id,
            status = %transition.effective,
            order,
            "Article created"
        );
        Ok(created)
    }

    async fn update(
        &self,
        id: &ArticleId,
        mut draft: ArticleDraft,
    ) -> Result<Article, LifecycleError> {
        let actor = self.actors.current_actor();
        let transition = self.settle_status(&mut draft, &actor);

        let patch = ArticlePatch::from_draft(&draft)?;
        let updated = self.cache.repository().update_article(id, patch).await?;
        self.cache.invalidate("article updated");

        info!(article_id = %id, status = %transition.effective, "Article updated");
        Ok(updated)
    }

    async fn publish(&self, article: &Article) -> Result<Article, LifecycleError> {
        let actor = self.actors.current_actor();
        if !self.privileged(&actor) {
            warn!(
                identity = %actor.identity,
                article_id = %article.id,
                "Publish denied"
            );
            return Err(LifecycleError::PermissionDenied {
                action: "publish",
                identity: actor.identity,
            });
        }

        let mut next = article.clone();
        next.mark_published(self.clock.today());
        let patch = ArticlePatch::full(&next)?;

        let published = self
            .cache
            .repository()
            .update_article(&article.id, patch)
            .await?;
        self.cache.invalidate("article published");

        info!(
            article_id = %article.id,
            published_date = ?published.published_date,
            "Article published"
        );
        Ok(published)
    }

    async fn delete(&self, id: &ArticleId) -> Result<(), LifecycleError> {
        self.cache.repository().delete_article(id).await?;
        self.cache.invalidate("article deleted");

        info!(article_id = %id, "Article deleted");
        Ok(())
    }
}
