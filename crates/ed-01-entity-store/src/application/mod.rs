//! Application layer: typed repository, cache and reference lookups

pub mod cache;
pub mod reference;
pub mod repository;
