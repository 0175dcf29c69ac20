//! Core entities for the ordering engine

use super::value_objects::{CategoryFilter, Direction, OrderUpdate, StatusFilter};
use crate::algorithms::relocate::relocate;
use serde::Serialize;
use shared_types::{Article, ArticleId};

// =============================================================================
// WORKING COPY
// =============================================================================

/// Editable snapshot of a filtered view during a reorder session.
///
/// Nothing here touches the store. After any successful move every article's
/// `order` equals its index in the copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WorkingCopy {
    articles: Vec<Article>,
}

impl WorkingCopy {
    /// Snapshot a view as-is. Existing `order` values are kept until the
    /// first move.
    pub fn begin(view: Vec<Article>) -> Self {
        Self { articles: view }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ArticleId> {
        self.articles.iter().map(|article| &article.id)
    }

    /// Move the article at `from` to `to` and renumber the whole copy.
    ///
    /// An absent or out-of-range `to` (a cancelled drag) leaves the copy
    /// untouched and returns `false`.
    pub fn move_item(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else {
            return false;
        };
        if !relocate(&mut self.articles, from, to) {
            return false;
        }
        self.renumber();
        true
    }

    /// Value-style [`move_item`](Self::move_item).
    pub fn moved(mut self, from: usize, to: Option<usize>) -> Self {
        self.move_item(from, to);
        self
    }

    /// Move an article one slot. No-op at either end.
    pub fn nudge(&mut self, index: usize, direction: Direction) -> bool {
        let to = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        self.move_item(index, to)
    }

    /// One order-only update per article, in copy order.
    ///
    /// An article that was never renumbered and has no stored order is
    /// assigned its position.
    pub fn order_updates(&self) -> Vec<OrderUpdate> {
        self.articles
            .iter()
            .enumerate()
            .map(|(index, article)| OrderUpdate {
                id: article.id.clone(),
                order: article.order.unwrap_or(index as i64),
            })
            .collect()
    }

    fn renumber(&mut self) {
        for (index, article) in self.articles.iter_mut().enumerate() {
            article.order = Some(index as i64);
        }
    }
}

// =============================================================================
// REORDER SESSION
// =============================================================================

/// An open reorder session: the filters it was started under and the copy
/// being edited.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReorderSession {
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub working: WorkingCopy,
}

impl ReorderSession {
    pub fn new(category: CategoryFilter, status: StatusFilter, view: Vec<Article>) -> Self {
        Self {
            category,
            status,
            working: WorkingCopy::begin(view),
        }
    }
}

/// Outcome of a fully successful commit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    /// Order updates written
    pub written: usize,
}
