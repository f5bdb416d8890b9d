//! Classification domain
//!
//! - [`Classification`]: the artifact produced for a business query
//! - [`SimpleRule`]: keyword rule mapping a query to a coarse classification
//! - [`ReferenceEntry`]: vetted static data keyed by query fragment

mod entities;
mod reference;
mod rule;

pub use entities::Classification;
pub use reference::ReferenceEntry;
pub use rule::SimpleRule;
