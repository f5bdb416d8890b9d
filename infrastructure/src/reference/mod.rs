//! Static reference data adapters.

mod static_store;

pub use static_store::StaticReferenceStore;
