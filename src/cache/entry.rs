//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access metadata.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and access metadata.
///
/// The metadata drives the frequency- and recency-based eviction policies:
/// `access_count` starts at 1 on insertion and grows by one per successful
/// read; `last_access` is refreshed on every successful read.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Number of successful reads, counting the insertion itself
    pub access_count: u64,
    /// Timestamp of the most recent insertion or successful read
    pub last_access: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with fresh metadata.
    pub fn new(value: V) -> Self {
        Self {
            value,
            access_count: 1,
            last_access: Utc::now(),
        }
    }

    // == Touch ==
    /// Records a successful read: bumps the access count and refreshes the
    /// last-access timestamp.
    pub fn touch(&mut self) {
        self.access_count += 1;
        self.last_access = Utc::now();
    }
}
