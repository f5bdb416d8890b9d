//! Static reference data port
//!
//! The reference store is populated once at construction and read-only
//! afterwards, so lookups need no locking.

use degrade_domain::ReferenceEntry;

/// Read-only keyword-indexed reference data.
pub trait ReferenceLookup: Send + Sync {
    /// Case-insensitive exact match on the key.
    fn exact(&self, query: &str) -> Option<&ReferenceEntry>;

    /// First entry, in sorted key order, whose key contains the query or is
    /// contained in it (case-insensitive).
    fn containing(&self, query: &str) -> Option<&ReferenceEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
