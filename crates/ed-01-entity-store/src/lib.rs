//! # ED-01: Entity Store
//!
//! Adapter layer between the editorial engines and the external entity store.
//!
//! ## Architecture
//!
//! - **Domain**: `Record`, `SortKey`, `ArticlePatch`, record codec, `StoreError`
//! - **Ports**: Outbound `EntityStore` (list/create/update/delete over named collections)
//! - **Application**: `ArticleRepository` (typed access), `ArticleCache`
//!   (invalidation-driven snapshot), `ReferenceDirectory` (team/tag labels)
//! - **Adapters**: `InMemoryEntityStore` with call log and fault injection
//!
//! ## Consistency Model
//!
//! No engine mutates the cached article collection. Every write goes to the
//! store, and a successful write invalidates the cache; the next read refetches.
//!
//! ```text
//! engine ──write──→ EntityStore ──ok──→ ArticleCache::invalidate ──→ CacheEvent
//!    ↑                                                                  │
//!    └──────────────── ArticleCache::articles (refetch) ←───────────────┘
//! ```
//!
//! The store provides per-record atomicity only. Batches spanning several
//! records can be left partially applied.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{InMemoryEntityStore, StoreCall};
pub use application::cache::{ArticleCache, CacheEvent};
pub use application::reference::ReferenceDirectory;
pub use application::repository::{ArticleListing, ArticleRepository};
pub use config::StoreConfig;
pub use domain::errors::StoreError;
pub use domain::record::{ArticlePatch, Record, SortKey};
pub use ports::outbound::EntityStore;
