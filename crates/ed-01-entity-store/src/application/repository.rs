//! Typed access to the article, team and tag collections.

use crate::config::StoreConfig;
use crate::domain::errors::StoreError;
use crate::domain::record::{decode, encode, record_id, ArticlePatch, Record, SortKey};
use crate::ports::outbound::EntityStore;
use serde::de::DeserializeOwned;
use shared_types::{Article, ArticleId, EditorialTeamMember, NewArticle, Tag};
use std::sync::Arc;
use tracing::{debug, warn};

/// Decoded article collection plus the ids of records that did not decode.
#[derive(Clone, Debug, Default)]
pub struct ArticleListing {
    pub articles: Vec<Article>,
    pub skipped: Vec<String>,
}

/// Decode every record on its own. A malformed record is logged and left out
/// instead of failing the whole listing.
fn decode_each<T: DeserializeOwned>(
    collection: &str,
    records: Vec<Record>,
) -> (Vec<T>, Vec<String>) {
    let mut decoded = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for record in records {
        let id = record_id(&record).unwrap_or("?").to_string();
        match decode(collection, record) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                warn!(collection, record = %id, error = %e, "Skipping malformed record");
                skipped.push(id);
            }
        }
    }
    (decoded, skipped)
}

/// Article repository over an [`EntityStore`].
///
/// Cheap to clone; every engine holds one through the shared cache.
#[derive(Clone)]
pub struct ArticleRepository {
    store: Arc<dyn EntityStore>,
    config: StoreConfig,
}

impl ArticleRepository {
    pub fn new(store: Arc<dyn EntityStore>, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn articles(&self) -> &str {
        &self.config.articles_collection
    }

    /// The full, unfiltered article collection, minus undecodable records.
    pub async fn load_articles(&self) -> Result<ArticleListing, StoreError> {
        let sort = self
            .config
            .article_list_sort
            .as_deref()
            .and_then(SortKey::parse);
        let records = self.store.list(self.articles(), sort.as_ref()).await?;
        debug!(count = records.len(), "Listed articles");
        let (articles, skipped) = decode_each(self.articles(), records);
        Ok(ArticleListing { articles, skipped })
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.load_articles().await?.articles)
    }

    /// Articles whose ids appear in `ids`. Unknown and malformed records are
    /// absent from the result.
    pub async fn list_articles_by_ids(
        &self,
        ids: &[ArticleId],
    ) -> Result<Vec<Article>, StoreError> {
        let raw: Vec<String> = ids.iter().map(|id| id.0.clone()).collect();
        let records = self.store.list_by_ids(self.articles(), &raw).await?;
        Ok(decode_each(self.articles(), records).0)
    }

    pub async fn create_article(&self, article: &NewArticle) -> Result<Article, StoreError> {
        let record = encode(self.articles(), article)?;
        let created = self.store.create(self.articles(), record).await?;
        decode(self.articles(), created)
    }

    pub async fn update_article(
        &self,
        id: &ArticleId,
        patch: ArticlePatch,
    ) -> Result<Article, StoreError> {
        let updated = self
            .store
            .update(self.articles(), id.as_str(), patch.into_record())
            .await?;
        decode(self.articles(), updated)
    }

    pub async fn delete_article(&self, id: &ArticleId) -> Result<(), StoreError> {
        self.store.delete(self.articles(), id.as_str()).await
    }

    /// Editorial team, in the store's team sort order.
    pub async fn list_team(&self) -> Result<Vec<EditorialTeamMember>, StoreError> {
        let collection = &self.config.team_collection;
        let sort = self
            .config
            .team_list_sort
            .as_deref()
            .and_then(SortKey::parse);
        let records = self.store.list(collection, sort.as_ref()).await?;
        Ok(decode_each(collection, records).0)
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, StoreError> {
        let collection = &self.config.tags_collection;
        let records = self.store.list(collection, None).await?;
        Ok(decode_each(collection, records).0)
    }
}
