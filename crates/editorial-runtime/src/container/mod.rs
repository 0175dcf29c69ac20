//! # Console Container
//!
//! Holds the shared article cache and every engine, wired to one store and
//! one actor provider.

pub mod config;
pub mod console;

pub use config::RuntimeConfig;
pub use console::EditorialConsole;
