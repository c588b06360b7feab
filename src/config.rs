//! Configuration Module
//!
//! Handles loading cache construction parameters from environment variables.

use std::env;

use crate::cache::EvictionPolicy;

/// Default depth of the bottom-K frequency set for the LRU-K policy.
const DEFAULT_LRU_K: usize = 2;

/// Cache construction parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Eviction policy applied when the cache is full
    pub policy: EvictionPolicy,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMCACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `MEMCACHE_POLICY` - One of `simple`, `lru`, `lfu`, `random`,
    ///   `lru-k` (default: simple)
    /// - `MEMCACHE_LRU_K` - Bottom-K depth when the policy is `lru-k`
    ///   (default: 2)
    pub fn from_env() -> Self {
        let lru_k = env::var("MEMCACHE_LRU_K")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&k| k >= 1)
            .unwrap_or(DEFAULT_LRU_K);

        Self {
            max_entries: env::var("MEMCACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            policy: env::var("MEMCACHE_POLICY")
                .ok()
                .and_then(|v| parse_policy(&v, lru_k))
                .unwrap_or(EvictionPolicy::Simple),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            policy: EvictionPolicy::Simple,
        }
    }
}

/// Maps a policy name to its [`EvictionPolicy`] variant.
///
/// Unrecognized names yield `None` so the caller can fall back to a default.
fn parse_policy(name: &str, lru_k: usize) -> Option<EvictionPolicy> {
    match name.trim().to_ascii_lowercase().as_str() {
        "simple" => Some(EvictionPolicy::Simple),
        "lru" => Some(EvictionPolicy::Lru),
        "lfu" => Some(EvictionPolicy::Lfu),
        "random" => Some(EvictionPolicy::Random),
        "lru-k" | "lruk" => Some(EvictionPolicy::LruK(lru_k)),
        _ => None,
    }
}
