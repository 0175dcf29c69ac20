//! Ports module for the entity store layer
//!
//! Only an outbound port: the external store the engines drive.

pub mod outbound;

pub use outbound::EntityStore;
