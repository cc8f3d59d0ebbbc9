//! Fixed-capacity least-recently-used cache for response bodies.
//!
//! Entries live in a slab of nodes linked by index into a recency list, with a
//! hash index from key to slot. Lookup, promotion and eviction are all O(1).
//!
//! # Example
//!
//! ```rust
//! use poe_api_client::cache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.insert("a", "1");
//! cache.insert("b", "2");
//!
//! // Touching "a" makes "b" the eviction candidate.
//! assert_eq!(cache.get("a"), Some("1"));
//! cache.insert("c", "3");
//! assert!(!cache.contains("b"));
//! # Ok::<(), poe_api_client::PoeError>(())
//! ```

use std::collections::HashMap;

use crate::error::PoeError;

/// Sentinel for "no neighbour".
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    key: String,
    value: String,
    prev: usize,
    next: usize,
}

/// A string-keyed LRU cache bounded by entry count.
#[derive(Debug)]
pub struct LruCache {
    capacity: usize,
    index: HashMap<String, usize>,
    nodes: Vec<Node>,
    /// Most recently used
    head: usize,
    /// Least recently used
    tail: usize,
}

impl LruCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// Fails with [`PoeError::InvalidCacheSize`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, PoeError> {
        if capacity < 1 {
            return Err(PoeError::InvalidCacheSize);
        }
        Ok(Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        })
    }

    /// Look up a value and mark it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let slot = *self.index.get(key)?;
        self.promote(slot);
        Some(self.nodes[slot].value.as_str())
    }

    /// Insert or overwrite a value and mark it most recently used.
    ///
    /// Evicts the least recently used entry if the cache grows past capacity.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(&slot) = self.index.get(&key) {
            self.nodes[slot].value = value;
            self.promote(slot);
            return;
        }

        if self.nodes.len() < self.capacity {
            let slot = self.nodes.len();
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            self.index.insert(key, slot);
            self.push_front(slot);
            return;
        }

        // Full: reuse the tail slot for the new entry.
        let slot = self.tail;
        self.unlink(slot);
        let node = &mut self.nodes[slot];
        let evicted = std::mem::replace(&mut node.key, key.clone());
        node.value = value;
        self.index.remove(&evicted);
        self.index.insert(key, slot);
        self.push_front(slot);
    }

    /// Check for a key without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    fn promote(&mut self, slot: usize) {
        if self.head == slot {
            return;
        }
        self.unlink(slot);
        self.push_front(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        match prev {
            NIL => self.head = next,
            prev => self.nodes[prev].next = next,
        }
        match next {
            NIL => self.tail = prev,
            next => self.nodes[next].prev = prev,
        }
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }

    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(LruCache::new(0), Err(PoeError::InvalidCacheSize)));
        assert!(LruCache::new(1).is_ok());
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = LruCache::new(4).unwrap();
        cache.insert("key1", "A");
        assert_eq!(cache.get("key1"), Some("A"));
        assert_eq!(cache.get("key2"), None);
    }

    #[test]
    fn test_evicts_first_inserted() {
        let mut cache = LruCache::new(3).unwrap();
        for key in ["1", "2", "3", "4"] {
            cache.insert(key, key);
        }
        assert!(!cache.contains("1"));
        assert!(cache.contains("2"));
        assert!(cache.contains("3"));
        assert!(cache.contains("4"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_get_protects_from_eviction() {
        let mut cache = LruCache::new(3).unwrap();
        cache.insert("1", "A");
        cache.insert("2", "B");
        cache.insert("3", "C");

        cache.get("1");
        cache.insert("4", "D");

        assert!(cache.contains("1"));
        assert!(!cache.contains("2"));
    }

    #[test]
    fn test_overwrite_protects_from_eviction() {
        let mut cache = LruCache::new(3).unwrap();
        cache.insert("1", "A");
        cache.insert("2", "B");
        cache.insert("3", "C");

        cache.insert("1", "Z");
        cache.insert("4", "D");

        assert_eq!(cache.get("1"), Some("Z"));
        assert!(!cache.contains("2"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_repeated_get_keeps_size() {
        let mut cache = LruCache::new(2).unwrap();
        cache.insert("k", "v");
        for _ in 0..10 {
            assert_eq!(cache.get("k"), Some("v"));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();
        cache.insert("a", "1");
        cache.insert("b", "2");
        assert!(!cache.contains("a"));
        assert_eq!(cache.get("b"), Some("2"));
    }

    #[test]
    fn test_eviction_scenario() {
        let mut cache = LruCache::new(10).unwrap();
        let values = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];
        for (i, value) in values.iter().enumerate() {
            cache.insert((i + 1).to_string(), *value);
        }
        assert_eq!(cache.len(), 9);

        cache.insert("10", "J");
        cache.insert("11", "K");

        assert!(!cache.contains("1"));
        assert_eq!(cache.get("5"), Some("E"));
        assert_eq!(cache.len(), 10);
    }

    #[test]
    fn test_clear() {
        let mut cache = LruCache::new(2).unwrap();
        cache.insert("a", "1");
        cache.clear();
        assert!(cache.is_empty());
        cache.insert("b", "2");
        cache.insert("c", "3");
        assert_eq!(cache.len(), 2);
    }
}
