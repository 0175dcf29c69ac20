//! Ports for the lifecycle engine

pub mod inbound;
pub mod outbound;

pub use inbound::LifecycleApi;
pub use outbound::ActorProvider;
