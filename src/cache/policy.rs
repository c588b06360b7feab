//! Eviction Policy Module
//!
//! Implements victim selection for every eviction strategy the cache
//! supports. The set of policies is fixed, so it is modeled as a closed
//! enum; exhaustive matching catches a missing case at compile time.
//!
//! All tie-breaks are deterministic: when two entries compare equal under a
//! policy's criterion, the one inserted earlier (smaller `key_order`
//! position) is chosen.

use std::collections::HashMap;

use rand::Rng;

use crate::cache::CacheEntry;

// == Eviction Policy ==
/// Strategy used to pick the entry removed when the cache is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Removes the oldest surviving insertion (FIFO-like; reads do not
    /// refresh the insertion order).
    Simple,
    /// Removes the entry with the oldest last-access timestamp.
    Lru,
    /// Removes the entry with the lowest access count.
    Lfu,
    /// Removes a uniformly random entry.
    Random,
    /// Narrows to the K entries with the lowest access counts, then removes
    /// the least recently accessed among them. Protects frequently read
    /// items while recency still decides within the infrequent tail.
    /// K must be at least 1; smaller values are treated as 1.
    LruK(usize),
}

impl EvictionPolicy {
    // == Select Victim ==
    /// Picks the key to evict under this policy.
    ///
    /// Entries are examined in `key_order` (first-insertion) order so that
    /// ties resolve to the earliest-inserted key. Returns `None` iff the
    /// cache holds no entries.
    pub(crate) fn select_victim<V>(
        &self,
        entries: &HashMap<String, CacheEntry<V>>,
        key_order: &[String],
    ) -> Option<String> {
        if entries.is_empty() {
            return None;
        }

        match self {
            EvictionPolicy::Simple => key_order.first().cloned(),
            EvictionPolicy::Lru => key_order
                .iter()
                .min_by_key(|key| entries[key.as_str()].last_access)
                .cloned(),
            EvictionPolicy::Lfu => key_order
                .iter()
                .min_by_key(|key| entries[key.as_str()].access_count)
                .cloned(),
            EvictionPolicy::Random => {
                let index = rand::rng().random_range(0..key_order.len());
                key_order.get(index).cloned()
            }
            EvictionPolicy::LruK(k) => {
                // Stable sort keeps insertion order within equal counts, so
                // the bottom-K set is deterministic.
                let mut ranked: Vec<&String> = key_order.iter().collect();
                ranked.sort_by_key(|key| entries[key.as_str()].access_count);

                let bottom_k = &ranked[..(*k).max(1).min(ranked.len())];
                bottom_k
                    .iter()
                    .min_by_key(|key| entries[key.as_str()].last_access)
                    .map(|key| (*key).clone())
            }
        }
    }
}
