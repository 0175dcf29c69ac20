//! Algorithms module for the ordering engine
//!
//! Contains:
//! - Filtered, order-sorted views
//! - Single-element relocation
//! - Next order for newly created articles

pub mod next_order;
pub mod relocate;
pub mod view;

pub use next_order::next_order;
pub use relocate::relocate;
pub use view::view;
