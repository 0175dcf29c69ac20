//! # Error Types
//!
//! Error taxonomy shared across the engine crates.

use thiserror::Error;

/// Operator-facing classification of every engine failure.
///
/// Each engine keeps its own error enum; `kind()` on those enums maps into
/// this taxonomy so the rendering layer can react uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A privileged action was attempted by a non-privileged actor.
    PermissionDenied,
    /// Empty required selection or similar caller mistake.
    InvalidArgument,
    /// Any failure reported by the external entity store.
    Store,
}

impl ErrorKind {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Store => "store",
        }
    }
}

/// Failure to parse a fixed-set enum from its wire name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}
