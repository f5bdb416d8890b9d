//! Result cache adapters.

mod memory_cache;

pub use memory_cache::InMemoryResultCache;
