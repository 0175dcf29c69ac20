//! Domain module for bulk operations

pub mod entities;
pub mod errors;
pub mod selection;

pub use entities::*;
pub use errors::*;
pub use selection::*;
