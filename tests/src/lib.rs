//! # Editorial Core Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks for the hot ordering paths
//! └── src/integration/  # flows across the store, the cache and the engines
//!     ├── fixtures.rs
//!     ├── flows.rs
//!     ├── partial_failures.rs
//!     └── properties.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ed-tests
//!
//! # Benchmarks
//! cargo bench -p ed-tests
//! ```

pub mod integration;
