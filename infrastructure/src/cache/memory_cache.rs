//! In-memory result cache with TTL checked on read.
//!
//! Lookups take the read lock. Inserts, expiry removal and the periodic
//! sweep take the write lock. An expired entry is never returned: it is
//! removed by the lookup that discovers it.

use chrono::{DateTime, Utc};
use degrade_application::ports::result_cache::{CacheLookup, ResultCache};
use degrade_domain::CachedEntry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Keys are trimmed and lower-cased so lookups are case-insensitive.
fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}

pub struct InMemoryResultCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
    ttl: Duration,
}

impl InMemoryResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    // Poisoning is recovered: entries are inserted and removed whole.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CachedEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CachedEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Lookup relative to an explicit clock reading.
    pub fn lookup_at(&self, query: &str, now: DateTime<Utc>) -> CacheLookup {
        let key = normalize_key(query);

        let age = {
            let entries = self.read();
            match entries.get(&key) {
                None => return CacheLookup::Miss,
                Some(entry) if entry.is_fresh_at(now, self.ttl) => {
                    return CacheLookup::Hit(entry.clone());
                }
                Some(entry) => entry.age_at(now),
            }
        };

        // Re-check under the write lock: a concurrent insert may have refreshed it.
        let mut entries = self.write();
        match entries.get(&key) {
            Some(entry) if entry.is_fresh_at(now, self.ttl) => CacheLookup::Hit(entry.clone()),
            Some(_) => {
                entries.remove(&key);
                debug!("Evicted expired cache entry '{}'", key);
                CacheLookup::Expired { age }
            }
            None => CacheLookup::Miss,
        }
    }

    /// Remove every entry expired at `now`, returning how many were removed.
    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh_at(now, self.ttl));
        before - entries.len()
    }

    /// Spawn a background task that purges expired entries every `interval`
    /// until `cancellation` fires.
    pub fn spawn_sweeper(
        self: Arc<Self>,
        interval: Duration,
        cancellation: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = cancellation.cancelled() => {
                        debug!("Cache sweeper stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let purged = self.purge_expired();
                        if purged > 0 {
                            debug!("Cache sweep evicted {} expired entries", purged);
                        }
                    }
                }
            }
        })
    }
}

impl ResultCache for InMemoryResultCache {
    fn lookup(&self, query: &str) -> CacheLookup {
        self.lookup_at(query, Utc::now())
    }

    fn insert(&self, query: &str, entry: CachedEntry) {
        self.write().insert(normalize_key(query), entry);
    }

    fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use degrade_domain::Classification;

    const TTL: Duration = Duration::from_secs(3600);

    fn entry_at(timestamp: DateTime<Utc>) -> CachedEntry {
        CachedEntry::new(
            Classification::new("c-1", "722511", "Full-Service Restaurants"),
            0.9,
            timestamp,
            "primary",
        )
    }

    #[test]
    fn test_hit_just_before_ttl() {
        let cache = InMemoryResultCache::new(TTL);
        let t = Utc::now();
        cache.insert("Joe's Diner", entry_at(t));

        let now = t + TimeDelta::seconds(3599);
        assert!(matches!(cache.lookup_at("joe's diner", now), CacheLookup::Hit(_)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_after_ttl_is_removed_on_read() {
        let cache = InMemoryResultCache::new(TTL);
        let t = Utc::now();
        cache.insert("joe's diner", entry_at(t));

        let now = t + TimeDelta::seconds(3601);
        match cache.lookup_at("joe's diner", now) {
            CacheLookup::Expired { age } => assert_eq!(age, Duration::from_secs(3601)),
            other => panic!("expected expiry, got {other:?}"),
        }
        assert!(cache.is_empty());
        assert_eq!(cache.lookup_at("joe's diner", now), CacheLookup::Miss);
    }

    #[test]
    fn test_key_normalization() {
        let cache = InMemoryResultCache::new(TTL);
        cache.insert("  Acme Software ", entry_at(Utc::now()));
        assert!(cache.lookup("ACME SOFTWARE").into_entry().is_some());
        assert!(cache.lookup("acme software").into_entry().is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_purge_expired() {
        let cache = InMemoryResultCache::new(TTL);
        let t = Utc::now();
        cache.insert("old", entry_at(t - TimeDelta::hours(2)));
        cache.insert("new", entry_at(t));

        assert_eq!(cache.purge_expired_at(t), 1);
        assert_eq!(cache.len(), 1);
        assert!(matches!(cache.lookup_at("new", t), CacheLookup::Hit(_)));
    }

    #[tokio::test]
    async fn test_sweeper_evicts_and_stops() {
        let cache = Arc::new(InMemoryResultCache::new(Duration::from_millis(10)));
        cache.insert("stale", entry_at(Utc::now() - TimeDelta::seconds(5)));

        let token = CancellationToken::new();
        let handle = Arc::clone(&cache).spawn_sweeper(Duration::from_millis(5), token.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(cache.is_empty());

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access_never_returns_expired() {
        const WORKERS: usize = 8;
        const KEYS_PER_WORKER: usize = 10;

        let cache = Arc::new(InMemoryResultCache::new(TTL));
        let now = Utc::now();
        let stale = now - TimeDelta::hours(2);
        for i in 0..20 {
            cache.insert(&format!("stale-{i}"), entry_at(stale));
        }
        cache.insert("contested", entry_at(stale));

        let mut handles = Vec::new();
        for worker in 0..WORKERS {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                for round in 0..200 {
                    let key = format!("fresh-{worker}-{}", round % KEYS_PER_WORKER);
                    cache.insert(&key, entry_at(now));
                    match cache.lookup_at(&key, now) {
                        CacheLookup::Hit(entry) => assert!(entry.is_fresh_at(now, TTL)),
                        other => panic!("fresh entry missing: {other:?}"),
                    }

                    assert!(!matches!(
                        cache.lookup_at(&format!("stale-{}", round % 20), now),
                        CacheLookup::Hit(_)
                    ));

                    // Writers race stale and fresh values into one key
                    let timestamp = if (worker + round) % 2 == 0 { stale } else { now };
                    cache.insert("contested", entry_at(timestamp));
                    if let CacheLookup::Hit(entry) = cache.lookup_at("contested", now) {
                        assert!(entry.is_fresh_at(now, TTL));
                    }

                    tokio::task::yield_now().await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..20 {
            assert_eq!(cache.lookup_at(&format!("stale-{i}"), now), CacheLookup::Miss);
        }
        cache.purge_expired_at(now);
        let contested = usize::from(cache.lookup_at("contested", now) != CacheLookup::Miss);
        assert_eq!(cache.len(), WORKERS * KEYS_PER_WORKER + contested);
    }
}
