//! Publication state machine.
//!
//! | requested          | privileged | effective          |
//! |--------------------|------------|--------------------|
//! | draft              | any        | draft              |
//! | awaiting_approval  | any        | awaiting_approval  |
//! | published          | true       | published          |
//! | published          | false      | awaiting_approval  |

use serde::Serialize;
use shared_types::ArticleStatus;

/// Status actually persisted for a requested status.
pub fn effective_status(requested: ArticleStatus, privileged: bool) -> ArticleStatus {
    match requested {
        ArticleStatus::Published if !privileged => ArticleStatus::AwaitingApproval,
        other => other,
    }
}

/// A requested status and what it resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub requested: ArticleStatus,
    pub effective: ArticleStatus,
}

impl Transition {
    pub fn resolve(requested: ArticleStatus, privileged: bool) -> Self {
        Self {
            requested,
            effective: effective_status(requested, privileged),
        }
    }

    pub fn downgraded(&self) -> bool {
        self.requested != self.effective
    }

    pub fn publishes(&self) -> bool {
        self.effective == ArticleStatus::Published
    }
}
