//! Query fragment building, request assembly, and facet parsing.

pub mod escape;
pub mod facets;
pub mod pagination;
pub mod query_builder;
pub mod request;
pub mod session;

pub use escape::*;
pub use facets::*;
pub use pagination::*;
pub use query_builder::*;
pub use request::*;
pub use session::*;
