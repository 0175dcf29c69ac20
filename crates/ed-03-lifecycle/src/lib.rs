//! # ED-03: Lifecycle Engine
//!
//! Publication state machine with role-gated transitions, and the
//! create/update/publish/delete paths for single articles.
//!
//! ## Architecture
//!
//! - **Domain**: transition table, `PrivilegePolicy`, article codes, `LifecycleError`
//! - **Ports**: Inbound `LifecycleApi`, Outbound `ActorProvider`
//! - **Application**: `LifecycleService`
//! - **Adapters**: `StaticActor`
//!
//! ## State Machine
//!
//! ```text
//! [draft] ──submit──→ [awaiting_approval] ──publish (privileged)──→ [published]
//! ```
//!
//! A non-privileged request for `published` is downgraded to
//! `awaiting_approval`. Entering `published` stamps `published_date` if it is
//! absent; later publishes leave it alone.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::StaticActor;
pub use application::service::LifecycleService;
pub use config::LifecycleConfig;
pub use domain::code::article_code;
pub use domain::errors::LifecycleError;
pub use domain::privilege::PrivilegePolicy;
pub use domain::transitions::{effective_status, Transition};
pub use ports::{ActorProvider, LifecycleApi};
