//! Memcache - A bounded in-memory key-value cache
//!
//! Provides a thread-safe entry store with a fixed capacity and a pluggable
//! eviction policy (Simple/FIFO, LRU, LFU, Random, LRU-K).

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{validate_key, Cache, CacheEntry, CacheStats, EvictionPolicy};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
