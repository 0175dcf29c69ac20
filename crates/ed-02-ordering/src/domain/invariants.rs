//! Domain invariants for the ordering engine

use super::entities::WorkingCopy;
use shared_types::Article;

/// INVARIANT-1: Positional Order
/// Every article's `order` equals its index in the copy.
/// Holds after any successful move.
pub fn invariant_positional_order(copy: &WorkingCopy) -> bool {
    copy.articles()
        .iter()
        .enumerate()
        .all(|(index, article)| article.order == Some(index as i64))
}

/// INVARIANT-2: Sorted View
/// A view is ascending by order, with a missing order counted as 0.
pub fn invariant_sorted_view(view: &[Article]) -> bool {
    view.windows(2)
        .all(|pair| pair[0].sort_key() <= pair[1].sort_key())
}

/// INVARIANT-3: New Articles Sort Last
/// `order` is strictly greater than every existing order.
pub fn invariant_sorts_last(order: i64, collection: &[Article]) -> bool {
    collection.iter().all(|article| article.sort_key() < order)
}
