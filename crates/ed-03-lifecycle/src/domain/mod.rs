//! Domain module for the lifecycle engine
//!
//! Contains the transition table, privilege policy, article codes and errors.

pub mod code;
pub mod errors;
pub mod privilege;
pub mod transitions;

pub use code::*;
pub use errors::*;
pub use privilege::*;
pub use transitions::*;
