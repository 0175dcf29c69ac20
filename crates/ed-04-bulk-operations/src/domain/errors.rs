//! Error types for bulk operations

use super::entities::BulkAction;
use ed_01_entity_store::StoreError;
use shared_types::{ArticleId, ErrorKind};
use thiserror::Error;

/// All errors that can occur in a bulk operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkError {
    /// The selection was empty
    #[error("Cannot {action}: no articles selected")]
    EmptySelection { action: BulkAction },

    /// A non-privileged actor attempted a privileged bulk action
    #[error("Permission denied: {identity} may not bulk {action}")]
    PermissionDenied {
        action: BulkAction,
        identity: String,
    },

    /// A write failed; earlier writes in the loop were kept
    #[error("Bulk {action} aborted at {failed_id} after {applied} of {total}: {source}")]
    Aborted {
        action: BulkAction,
        applied: usize,
        total: usize,
        failed_id: ArticleId,
        source: StoreError,
    },

    /// Loading the articles to act on failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BulkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BulkError::EmptySelection { .. } => ErrorKind::InvalidArgument,
            BulkError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            BulkError::Aborted { .. } | BulkError::Store(_) => ErrorKind::Store,
        }
    }
}
