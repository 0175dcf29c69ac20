//! Order assignment for newly created articles.

use shared_types::Article;

/// One past the largest order in the full, unfiltered collection.
///
/// Missing orders count as 0, and so does the maximum of an empty
/// collection, so the first article gets order 1. Saturates at `i64::MAX`.
pub fn next_order(collection: &[Article]) -> i64 {
    collection
        .iter()
        .map(Article::sort_key)
        .fold(0, i64::max)
        .saturating_add(1)
}
