//! Time-to-live map for resolved host addresses.
//!
//! Entries expire after a configurable duration. The DNS cache stores one
//! address ring per host here, so a host is re-resolved once its entry has
//! aged out.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use poe_api_client::cache::TtlCache;
//!
//! let mut cache: TtlCache<String, u16> = TtlCache::new(Duration::from_secs(300));
//!
//! cache.insert("api.pathofexile.com".to_string(), 443);
//! assert!(cache.contains("api.pathofexile.com"));
//!
//! cache.remove("api.pathofexile.com");
//! assert!(cache.get("api.pathofexile.com").is_none());
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::time::Instant;

/// A map whose entries expire a fixed time after insertion.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    cache: HashMap<K, (V, Instant)>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
{
    /// Create a new TTL cache with the specified time-to-live duration.
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: HashMap::new(),
            ttl,
        }
    }

    /// Insert a value, timestamped now. Replaces any previous entry.
    pub fn insert(&mut self, key: K, value: V) {
        self.cache.insert(key, (value, Instant::now()));
    }

    /// Get a reference to a value if it exists and hasn't expired.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.get(key).and_then(|(value, timestamp)| {
            if timestamp.elapsed() < self.ttl {
                Some(value)
            } else {
                None
            }
        })
    }

    /// Get a mutable reference to a value if it exists and hasn't expired.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ttl = self.ttl;
        self.cache.get_mut(key).and_then(|(value, timestamp)| {
            if timestamp.elapsed() < ttl {
                Some(value)
            } else {
                None
            }
        })
    }

    /// Remove an entry, returning it if it hadn't expired.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.remove(key).and_then(|(value, timestamp)| {
            if timestamp.elapsed() < self.ttl {
                Some(value)
            } else {
                None
            }
        })
    }

    /// Check if a key exists and hasn't expired.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Drop all expired entries.
    pub fn cleanup(&mut self) {
        let ttl = self.ttl;
        self.cache.retain(|_, (_, timestamp)| timestamp.elapsed() < ttl);
    }

    /// Number of entries, including expired ones not yet cleaned up.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_secs(60));

        cache.insert("host1".to_string(), 100);
        assert_eq!(cache.get("host1"), Some(&100));
        assert_eq!(cache.get("host2"), None);
    }

    #[test]
    fn test_get_mut() {
        let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_secs(60));

        cache.insert("host1".to_string(), 1);
        *cache.get_mut("host1").unwrap() += 1;
        assert_eq!(cache.get("host1"), Some(&2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration() {
        let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_millis(50));

        cache.insert("host1".to_string(), 100);
        assert!(cache.contains("host1"));

        tokio::time::advance(Duration::from_millis(60)).await;
        assert!(cache.get("host1").is_none());
        assert!(cache.get_mut("host1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup() {
        let mut cache: TtlCache<String, i32> = TtlCache::new(Duration::from_millis(50));

        cache.insert("host1".to_string(), 100);
        cache.insert("host2".to_string(), 200);

        tokio::time::advance(Duration::from_millis(60)).await;
        // Entry still in the map but expired.
        assert_eq!(cache.len(), 2);

        cache.cleanup();
        assert!(cache.is_empty());
    }
}
