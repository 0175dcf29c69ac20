//! Ports for bulk operations

pub mod inbound;

pub use inbound::BulkOperationsApi;
