//! # Editorial Runtime Library
//!
//! Exposes the console wiring for integration tests. The demo entry point is
//! the `editorial-console` binary.
//!
//! ## Architectural Patterns
//!
//! - **Hexagonal Architecture**: engines define ports, the runtime supplies adapters
//! - **Shared cache**: every engine reads through one `ArticleCache`
//! - **Observability at the edge**: metrics are recorded here, never in the engines

pub mod adapters;
pub mod container;
pub mod wiring;

pub use adapters::InstrumentedStore;
pub use container::{EditorialConsole, RuntimeConfig};
pub use wiring::spawn_cache_listener;
