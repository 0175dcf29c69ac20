//! Error types for the entity store layer

use shared_types::ErrorKind;
use thiserror::Error;

/// Failure reported by, or while talking to, the external store.
///
/// The engines do not distinguish transient from permanent failures; every
/// variant is surfaced to the operator as a store error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected or failed the request
    #[error("Store request failed: {0}")]
    Request(String),

    /// The addressed record does not exist
    #[error("Record not found in {collection}: {id}")]
    NotFound { collection: String, id: String },

    /// A record could not be encoded or decoded
    #[error("Malformed record in {collection}: {reason}")]
    Codec { collection: String, reason: String },
}

impl StoreError {
    pub fn request(message: impl Into<String>) -> Self {
        StoreError::Request(message.into())
    }

    pub fn codec(collection: &str, reason: impl ToString) -> Self {
        StoreError::Codec {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Store
    }
}
