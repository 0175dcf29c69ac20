//! Outbound Ports (Driven Ports / SPI)
//!
//! The store is reached through `ed_01_entity_store`; time through
//! `shared_types::Clock`. The actor boundary is defined here.

use shared_types::Actor;

/// Supplies the operator currently driving the console.
///
/// Authentication is somebody else's job; this port only reports who is
/// already signed in.
pub trait ActorProvider: Send + Sync {
    fn current_actor(&self) -> Actor;
}
