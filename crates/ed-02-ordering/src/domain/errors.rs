//! Error types for the ordering engine

use ed_01_entity_store::StoreError;
use shared_types::ErrorKind;
use thiserror::Error;

/// All errors that can occur while viewing or reordering articles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// A working-copy operation was attempted with no reorder session open
    #[error("No reorder session is open")]
    NoSession,

    /// Some order updates of a commit failed; the rest were applied
    #[error("Reorder commit failed: {failed} of {total} updates rejected ({first})")]
    PartialCommit {
        failed: usize,
        total: usize,
        first: StoreError,
    },

    /// Loading the article collection failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderingError::NoSession => ErrorKind::InvalidArgument,
            OrderingError::PartialCommit { .. } | OrderingError::Store(_) => ErrorKind::Store,
        }
    }
}
