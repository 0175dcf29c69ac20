//! Application layer for bulk operations

pub mod coordinator;
