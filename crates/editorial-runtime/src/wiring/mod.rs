//! # Event Wiring
//!
//! Background tasks subscribed to the engines' notification channels.

pub mod cache_events;

pub use cache_events::spawn_cache_listener;
