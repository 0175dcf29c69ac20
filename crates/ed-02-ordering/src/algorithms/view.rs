//! Filtered, order-sorted view over the article collection.

use crate::domain::value_objects::{CategoryFilter, StatusFilter};
use shared_types::Article;
use tracing::debug;

/// Filter by category and status, then sort ascending by `order`.
///
/// Missing `order` sorts as 0. The sort is stable, so ties keep the
/// collection's order.
pub fn view(articles: &[Article], category: CategoryFilter, status: StatusFilter) -> Vec<Article> {
    let mut selected: Vec<Article> = articles
        .iter()
        .filter(|article| category.matches(article) && status.matches(article))
        .cloned()
        .collect();
    selected.sort_by_key(Article::sort_key);

    debug!(
        %category,
        %status,
        total = articles.len(),
        selected = selected.len(),
        "Computed article view"
    );
    selected
}
