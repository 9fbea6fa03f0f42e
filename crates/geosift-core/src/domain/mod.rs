//! Domain models shared across the crate.

pub mod facet;
pub mod record;
pub mod spatial;

pub use facet::*;
pub use record::*;
pub use spatial::*;
