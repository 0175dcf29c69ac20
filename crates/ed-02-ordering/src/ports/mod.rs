//! Ports for the ordering engine
//!
//! The engine drives the entity store through `ed_01_entity_store` directly;
//! it exposes one inbound port.

pub mod inbound;

pub use inbound::OrderingApi;
