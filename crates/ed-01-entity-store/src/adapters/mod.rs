//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `EntityStore` port.

mod memory;

pub use memory::{InMemoryEntityStore, StoreCall};
