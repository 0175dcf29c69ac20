//! Error types for the lifecycle engine

use ed_01_entity_store::StoreError;
use shared_types::ErrorKind;
use thiserror::Error;

/// All errors that can occur on the create/update/publish/delete paths
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// A privileged action was attempted by a non-privileged actor
    #[error("Permission denied: {identity} may not {action}")]
    PermissionDenied {
        action: &'static str,
        identity: String,
    },

    /// The store failed the request
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LifecycleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LifecycleError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            LifecycleError::Store(_) => ErrorKind::Store,
        }
    }
}
