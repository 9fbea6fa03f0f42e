//! geosift-locations: Hierarchical location model and tri-state selection.
//!
//! Locations form a static tree (regions, countries, state-equivalents)
//! loaded once from configuration and immutable afterwards. User selection
//! lives in a flat set of toggled node IDs; checkbox display state is
//! always derived from that set on read, never stored.

pub mod hierarchy;
pub mod mapping;
pub mod node;
pub mod selection;

pub use hierarchy::*;
pub use mapping::*;
pub use node::*;
pub use selection::*;
