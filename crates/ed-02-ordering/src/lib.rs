//! # ED-02: Ordering Engine
//!
//! Filtered, order-sorted article views and manual reordering.
//!
//! ## Architecture
//!
//! - **Domain**: `WorkingCopy`, `ReorderSession`, category/status filters, `OrderingError`
//! - **Algorithms**: `view`, `relocate`, `next_order`
//! - **Ports**: Inbound `OrderingApi`
//! - **Application**: `OrderingService` (session handling, concurrent commit)
//!
//! ## Reorder Session
//!
//! ```text
//! begin_reorder ──→ [open] ──move / nudge──→ [open]
//!                     │
//!                     ├── commit ok ──→ [closed] + cache invalidated
//!                     ├── commit err ─→ [open]   (applied writes stay)
//!                     └── cancel ─────→ [closed] + cache invalidated
//! ```
//!
//! A commit issues one order-only update per article concurrently. The store
//! offers no cross-record atomicity, so a failed commit can leave the view
//! partially reordered. Re-list and retry.

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::{next_order, relocate, view};
pub use application::service::OrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::*;
pub use ports::inbound::OrderingApi;
