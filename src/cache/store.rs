//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with an insertion-order key
//! sequence and policy-driven eviction. All public operations serialize on a
//! single mutex, so each one is atomic with respect to every other.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, EvictionPolicy};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache State ==
/// Mutable state guarded by the cache mutex.
///
/// `key_order` holds exactly the keys present in `entries`, in first-insertion
/// order, with no duplicates. Policies rely on this ordering for deterministic
/// tie-breaking.
#[derive(Debug)]
struct CacheState<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys in first-insertion order
    key_order: Vec<String>,
    /// Performance statistics
    stats: CacheStats,
}

// == Cache ==
/// Bounded key-value cache with a pluggable eviction policy.
///
/// The capacity and policy are fixed at construction. The entry count never
/// exceeds the capacity: when a `set` of a new key finds the cache full, the
/// policy removes exactly one entry before the insert.
#[derive(Debug)]
pub struct Cache<V> {
    /// Guarded entry store
    state: Mutex<CacheState<V>>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Active eviction policy
    policy: EvictionPolicy,
}

impl<V: Clone> Cache<V> {
    // == Constructors ==
    /// Creates a new cache with the given capacity and eviction policy.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold, at least 1
    /// * `policy` - The eviction strategy applied when the cache is full
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                key_order: Vec::new(),
                stats: CacheStats::new(),
            }),
            capacity,
            policy,
        })
    }

    /// Creates a new cache using the Simple (FIFO-like) eviction policy.
    pub fn simple(capacity: usize) -> Result<Self> {
        Self::new(capacity, EvictionPolicy::Simple)
    }

    /// Creates a new cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.max_entries, config.policy)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// On a hit the entry's access count is incremented and its last-access
    /// timestamp refreshed. A miss leaves the entries untouched.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&self, key: &str) -> Result<V> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if let Some(entry) = state.entries.get_mut(key) {
            entry.touch();
            state.stats.record_hit();
            Ok(entry.value.clone())
        } else {
            state.stats.record_miss();
            Err(CacheError::KeyNotFound(key.to_string()))
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists its value is overwritten in place: the key
    /// keeps its position in the insertion order and the access metadata is
    /// reset as if the entry were new. Overwrites never trigger eviction.
    ///
    /// If the key is new and the cache is full, the active policy removes
    /// exactly one entry before the insert, so the capacity bound holds after
    /// every call.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn set(&self, key: String, value: V) -> Result<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let is_overwrite = state.entries.contains_key(&key);

        if !is_overwrite && state.entries.len() >= self.capacity {
            self.evict_locked(state)?;
        }

        state.entries.insert(key.clone(), CacheEntry::new(value));
        if !is_overwrite {
            state.key_order.push(key.clone());
        }
        state.stats.set_total_entries(state.entries.len());

        trace!(%key, is_overwrite, "stored entry");
        Ok(())
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Idempotent: deleting an absent key is not an error and has no effect.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&self, key: &str) {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if state.entries.remove(key).is_some() {
            state.key_order.retain(|k| k != key);
            state.stats.set_total_entries(state.entries.len());
            trace!(%key, "deleted entry");
        }
    }

    // == List ==
    /// Returns a snapshot of all live entries in first-insertion order.
    ///
    /// Overwritten keys keep their original position. The snapshot does not
    /// count as a read, so access metadata is unchanged.
    pub fn list(&self) -> Vec<(String, CacheEntry<V>)> {
        let guard = self.state.lock();

        guard
            .key_order
            .iter()
            .filter_map(|key| {
                guard
                    .entries
                    .get(key)
                    .map(|entry| (key.clone(), entry.clone()))
            })
            .collect()
    }

    // == Evict ==
    /// Removes exactly one entry chosen by the active eviction policy.
    ///
    /// Returns [`CacheError::EmptyCache`] if there is nothing to evict.
    pub fn evict(&self) -> Result<()> {
        let mut guard = self.state.lock();
        self.evict_locked(&mut guard)
    }

    /// Eviction body shared by `evict` and the full-cache path of `set`.
    /// Caller must hold the state lock.
    fn evict_locked(&self, state: &mut CacheState<V>) -> Result<()> {
        let victim = self
            .policy
            .select_victim(&state.entries, &state.key_order)
            .ok_or(CacheError::EmptyCache)?;

        // A selected key missing from the map would mean entries and
        // key_order diverged, which is an internal bug, not a user error.
        assert!(
            state.entries.remove(&victim).is_some(),
            "eviction victim {:?} not present in entry store",
            victim
        );
        state.key_order.retain(|k| k != &victim);
        state.stats.record_eviction();
        state.stats.set_total_entries(state.entries.len());

        debug!(key = %victim, policy = ?self.policy, "evicted entry");
        Ok(())
    }

    // == Accessors ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Returns true if the key is currently present. Does not count as a read.
    pub fn contains(&self, key: &str) -> bool {
        self.state.lock().entries.contains_key(key)
    }

    /// Returns the fixed capacity of the cache.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the active eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let guard = self.state.lock();
        let mut stats = guard.stats.clone();
        stats.set_total_entries(guard.entries.len());
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_new() {
        let cache: Cache<String> = Cache::new(100, EvictionPolicy::Lru).unwrap();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 100);
        assert_eq!(cache.policy(), EvictionPolicy::Lru);
    }

    #[test]
    fn test_cache_zero_capacity_rejected() {
        let result: Result<Cache<String>> = Cache::new(0, EvictionPolicy::Simple);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_cache_set_and_get() {
        let cache = Cache::simple(100).unwrap();

        cache.set("key1".to_string(), "value1".to_string()).unwrap();
        let value = cache.get("key1").unwrap();

        assert_eq!(value, "value1");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let cache: Cache<String> = Cache::simple(100).unwrap();

        let result = cache.get("nonexistent");
        assert!(matches!(result, Err(CacheError::KeyNotFound(_))));
    }

    #[test]
    fn test_cache_get_updates_metadata() {
        let cache = Cache::simple(100).unwrap();
        cache.set("key1".to_string(), 1u32).unwrap();

        let before = cache.list()[0].1.clone();
        cache.get("key1").unwrap();
        let after = cache.list()[0].1.clone();

        assert_eq!(after.access_count, before.access_count + 1);
        assert!(after.last_access >= before.last_access);
    }

    #[test]
    fn test_cache_miss_does_not_mutate_entries() {
        let cache = Cache::simple(100).unwrap();
        cache.set("key1".to_string(), 1u32).unwrap();

        let before = cache.list();
        let _ = cache.get("other");
        let after = cache.list();

        assert_eq!(before.len(), after.len());
        assert_eq!(before[0].1.access_count, after[0].1.access_count);
    }

    #[test]
    fn test_cache_delete_is_idempotent() {
        let cache = Cache::simple(100).unwrap();

        cache.set("key1".to_string(), "value1".to_string()).unwrap();
        cache.delete("key1");
        assert!(cache.is_empty());

        // Second delete of the same key is a no-op
        cache.delete("key1");
        assert!(cache.is_empty());
        assert!(matches!(cache.get("key1"), Err(CacheError::KeyNotFound(_))));
    }

    #[test]
    fn test_cache_overwrite_keeps_position_and_resets_metadata() {
        let cache = Cache::simple(100).unwrap();

        cache.set("a".to_string(), 1u32).unwrap();
        cache.set("b".to_string(), 2u32).unwrap();
        cache.get("a").unwrap();
        cache.get("a").unwrap();

        cache.set("a".to_string(), 10u32).unwrap();

        let listed = cache.list();
        assert_eq!(listed[0].0, "a");
        assert_eq!(listed[0].1.value, 10);
        assert_eq!(listed[0].1.access_count, 1);
        assert_eq!(listed[1].0, "b");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_overwrite_when_full_does_not_evict() {
        let cache = Cache::simple(2).unwrap();

        cache.set("a".to_string(), 1u32).unwrap();
        cache.set("b".to_string(), 2u32).unwrap();
        cache.set("a".to_string(), 3u32).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains("a"));
        assert!(cache.contains("b"));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_cache_capacity_never_exceeded() {
        let cache = Cache::simple(3).unwrap();

        for i in 0..10 {
            cache.set(format!("key{}", i), i).unwrap();
            assert!(cache.len() <= 3);
        }
        assert_eq!(cache.stats().evictions, 7);
    }

    #[test]
    fn test_cache_simple_evicts_oldest_insertion() {
        let cache = Cache::simple(3).unwrap();

        cache.set("key1".to_string(), 1u32).unwrap();
        cache.set("key2".to_string(), 2u32).unwrap();
        cache.set("key3".to_string(), 3u32).unwrap();

        // Reads do not protect entries under the Simple policy
        cache.get("key1").unwrap();
        cache.set("key4".to_string(), 4u32).unwrap();

        assert!(matches!(cache.get("key1"), Err(CacheError::KeyNotFound(_))));
        assert!(cache.get("key2").is_ok());
        assert!(cache.get("key3").is_ok());
        assert!(cache.get("key4").is_ok());
    }

    #[test]
    fn test_cache_lru_evicts_least_recently_accessed() {
        let cache = Cache::new(3, EvictionPolicy::Lru).unwrap();

        cache.set("a".to_string(), 1u32).unwrap();
        cache.set("b".to_string(), 2u32).unwrap();
        sleep(Duration::from_millis(5));
        cache.set("c".to_string(), 3u32).unwrap();

        sleep(Duration::from_millis(5));
        cache.get("a").unwrap();
        cache.get("b").unwrap();

        cache.set("d".to_string(), 4u32).unwrap();

        assert!(matches!(cache.get("c"), Err(CacheError::KeyNotFound(_))));
        assert!(cache.get("a").is_ok());
        assert!(cache.get("b").is_ok());
        assert!(cache.get("d").is_ok());
    }

    #[test]
    fn test_cache_lfu_evicts_least_frequent() {
        let cache = Cache::new(3, EvictionPolicy::Lfu).unwrap();

        cache.set("item1".to_string(), 1u32).unwrap();
        cache.set("item2".to_string(), 2u32).unwrap();
        cache.set("item3".to_string(), 3u32).unwrap();

        // item1 now has access_count 2; item2 and item3 are tied at 1 and
        // item2 was inserted first.
        cache.get("item1").unwrap();
        cache.set("item4".to_string(), 4u32).unwrap();

        assert!(matches!(
            cache.get("item2"),
            Err(CacheError::KeyNotFound(_))
        ));
        assert!(cache.get("item1").is_ok());
        assert!(cache.get("item3").is_ok());
        assert!(cache.get("item4").is_ok());
    }

    #[test]
    fn test_cache_evict_on_empty() {
        let cache: Cache<u32> = Cache::simple(5).unwrap();
        assert!(matches!(cache.evict(), Err(CacheError::EmptyCache)));
    }

    #[test]
    fn test_cache_evict_removes_exactly_one() {
        let cache = Cache::new(5, EvictionPolicy::Random).unwrap();
        for i in 0..5 {
            cache.set(format!("key{}", i), i).unwrap();
        }

        for expected in (0..5).rev() {
            cache.evict().unwrap();
            assert_eq!(cache.len(), expected);
        }
        assert!(matches!(cache.evict(), Err(CacheError::EmptyCache)));
    }

    #[test]
    fn test_cache_list_follows_insertion_order() {
        let cache = Cache::simple(10).unwrap();

        cache.set("b".to_string(), 2u32).unwrap();
        cache.set("a".to_string(), 1u32).unwrap();
        cache.set("c".to_string(), 3u32).unwrap();

        let keys: Vec<String> = cache.list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_cache_list_does_not_touch_metadata() {
        let cache = Cache::simple(10).unwrap();
        cache.set("a".to_string(), 1u32).unwrap();

        let _ = cache.list();
        let _ = cache.list();

        assert_eq!(cache.list()[0].1.access_count, 1);
    }

    #[test]
    fn test_cache_stats() {
        let cache = Cache::simple(100).unwrap();

        cache.set("key1".to_string(), 1u32).unwrap();
        cache.get("key1").unwrap(); // hit
        let _ = cache.get("nonexistent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_cache_from_config() {
        let config = CacheConfig {
            max_entries: 7,
            policy: EvictionPolicy::LruK(3),
        };
        let cache: Cache<u32> = Cache::from_config(&config).unwrap();

        assert_eq!(cache.capacity(), 7);
        assert_eq!(cache.policy(), EvictionPolicy::LruK(3));
    }
}
