//! Bulk actions and their reports.

use serde::{Deserialize, Serialize};
use shared_types::ArticleId;
use std::fmt;

/// Operation applied across a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    Publish,
    Delete,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Publish => "publish",
            BulkAction::Delete => "delete",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a fully applied bulk operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub action: BulkAction,
    /// Ids in the selection
    pub requested: usize,
    /// Writes that succeeded
    pub applied: usize,
    /// Selected ids the store no longer holds
    pub skipped: Vec<ArticleId>,
}
