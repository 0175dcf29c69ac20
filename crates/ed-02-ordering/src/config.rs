//! Configuration for the ordering engine

use serde::{Deserialize, Serialize};

/// Ordering configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Invalidate the article cache when a commit fails after some updates
    /// already landed, so the next view shows what the store really holds
    pub invalidate_on_partial_commit: bool,
    /// Cancelling a session also invalidates the cache
    pub invalidate_on_cancel: bool,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            invalidate_on_partial_commit: true,
            invalidate_on_cancel: true,
        }
    }
}

impl OrderingConfig {
    /// Defaults overridden by `ED_REORDER_INVALIDATE_ON_PARTIAL` and
    /// `ED_REORDER_INVALIDATE_ON_CANCEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(flag) = env_flag("ED_REORDER_INVALIDATE_ON_PARTIAL") {
            config.invalidate_on_partial_commit = flag;
        }
        if let Some(flag) = env_flag("ED_REORDER_INVALIDATE_ON_CANCEL") {
            config.invalidate_on_cancel = flag;
        }
        config
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
}
