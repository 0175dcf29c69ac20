//! Configuration for the entity store adapter layer

use std::env;

/// Collection names and list parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Collection holding articles
    pub articles_collection: String,
    /// Collection holding editorial team members
    pub team_collection: String,
    /// Collection holding tags
    pub tags_collection: String,
    /// Sort parameter passed on article lists (engines re-sort by `order`)
    pub article_list_sort: Option<String>,
    /// Sort parameter passed on team lists
    pub team_list_sort: Option<String>,
    /// Capacity of the cache event channel
    pub cache_event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            articles_collection: "Article".to_string(),
            team_collection: "EditorialTeam".to_string(),
            tags_collection: "Tag".to_string(),
            article_list_sort: Some("-created_date".to_string()),
            team_list_sort: Some("order".to_string()),
            cache_event_capacity: 64,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// - `ED_ARTICLES_COLLECTION` (default: Article)
    /// - `ED_TEAM_COLLECTION` (default: EditorialTeam)
    /// - `ED_TAGS_COLLECTION` (default: Tag)
    /// - `ED_ARTICLE_LIST_SORT` (default: -created_date, empty disables)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            articles_collection: env::var("ED_ARTICLES_COLLECTION")
                .unwrap_or(defaults.articles_collection),
            team_collection: env::var("ED_TEAM_COLLECTION").unwrap_or(defaults.team_collection),
            tags_collection: env::var("ED_TAGS_COLLECTION").unwrap_or(defaults.tags_collection),
            article_list_sort: match env::var("ED_ARTICLE_LIST_SORT") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(v),
                Err(_) => defaults.article_list_sort,
            },
            ..defaults
        }
    }
}
