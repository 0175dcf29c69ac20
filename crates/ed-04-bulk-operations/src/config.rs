//! Configuration for bulk operations

use serde::{Deserialize, Serialize};

/// Bulk operation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BulkConfig {
    /// Invalidate the article cache when a loop aborts after some writes
    /// already landed
    pub invalidate_on_abort: bool,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            invalidate_on_abort: true,
        }
    }
}
