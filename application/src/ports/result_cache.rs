//! Result cache port
//!
//! A time-bounded store of committed primary results. Implementations must
//! check the TTL on every read and remove an expired entry on the read that
//! discovers it.

use degrade_domain::CachedEntry;
use std::time::Duration;

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// A fresh entry
    Hit(CachedEntry),
    /// An entry existed but was past its TTL; it has been removed.
    Expired { age: Duration },
    Miss,
}

impl CacheLookup {
    pub fn into_entry(self) -> Option<CachedEntry> {
        match self {
            CacheLookup::Hit(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Shared, concurrently accessed result cache.
pub trait ResultCache: Send + Sync {
    /// Look up `query`, evicting the entry if it has expired.
    fn lookup(&self, query: &str) -> CacheLookup;

    /// Insert or replace the entry for `query`.
    fn insert(&self, query: &str, entry: CachedEntry);

    /// Remove every expired entry; returns how many were removed.
    fn purge_expired(&self) -> usize;

    /// Number of stored entries, expired ones included until evicted.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ttl(&self) -> Duration;
}
