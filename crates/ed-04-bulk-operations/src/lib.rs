//! # ED-04: Bulk Operations
//!
//! Publish or delete a [`Selection`] of articles.
//!
//! ## Architecture
//!
//! - **Domain**: `Selection`, `BulkAction`, `BulkReport`, `BulkError`
//! - **Ports**: Inbound `BulkOperationsApi`
//! - **Application**: `BulkOperationCoordinator`
//!
//! ## Execution Model
//!
//! Unlike a reorder commit, bulk writes are issued strictly one after another
//! so large selections do not burst the store. The first failure stops the
//! loop. Nothing is rolled back.
//!
//! Bulk publish loads its targets through `EntityStore::list_by_ids`. Stores
//! without a native lookup fall back to listing the whole collection.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::coordinator::BulkOperationCoordinator;
pub use config::BulkConfig;
pub use domain::entities::{BulkAction, BulkReport};
pub use domain::errors::BulkError;
pub use domain::selection::Selection;
pub use ports::inbound::BulkOperationsApi;
