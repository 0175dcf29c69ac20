//! # Runtime Adapters
//!
//! Decorators around the engines' outbound ports.

pub mod instrumented_store;

pub use instrumented_store::InstrumentedStore;
