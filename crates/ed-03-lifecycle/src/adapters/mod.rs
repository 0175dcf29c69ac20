//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `ActorProvider` port.

mod actor;

pub use actor::StaticActor;
