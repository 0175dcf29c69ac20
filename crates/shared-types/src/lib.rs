//! # Shared Types Crate
//!
//! Domain entities used by every editorial engine crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the article record shape is defined once here
//!   and decoded from / encoded to store records by `ed-01-entity-store`.
//! - **Opaque Content**: title, media URLs, rich body sections and gallery or
//!   product payloads are carried verbatim in [`Content`]; no engine inspects
//!   them beyond the title used for logging.
//! - **Weak References**: `author_id` and `tags` are identifiers only. The
//!   engines never load or mutate the referenced entities.

pub mod entities;
pub mod errors;
pub mod lenient;
pub mod time;

pub use entities::*;
pub use errors::*;
pub use time::{Clock, FixedClock, SystemClock};
