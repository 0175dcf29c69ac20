//! Domain module for the entity store layer

pub mod errors;
pub mod record;

pub use errors::*;
pub use record::*;
