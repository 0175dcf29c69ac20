//! Selected article ids, as an explicit value object.

use serde::{Deserialize, Serialize};
use shared_types::{Article, ArticleId};

/// Ordered set of selected article ids.
///
/// Keeps selection order; bulk operations visit ids in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: Vec<ArticleId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: ArticleId) {
        match self.ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id),
        }
    }

    /// Select every article in `view`, or clear the selection when all of
    /// them are already selected.
    pub fn select_all(&mut self, view: &[Article]) {
        let everything_selected =
            !view.is_empty() && view.iter().all(|article| self.contains(&article.id));
        if everything_selected {
            self.clear();
        } else {
            self.ids = Vec::with_capacity(view.len());
            for article in view {
                if !self.contains(&article.id) {
                    self.ids.push(article.id.clone());
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[ArticleId] {
        &self.ids
    }
}

impl FromIterator<ArticleId> for Selection {
    fn from_iter<I: IntoIterator<Item = ArticleId>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}
