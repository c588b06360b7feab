//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for all cache operations.
///
/// Every error is returned to the immediate caller as a value; the cache
/// never logs, retries, or swallows errors internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("key not found in cache: {0}")]
    KeyNotFound(String),

    /// Key does not meet the format or length requirements
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// Eviction was requested but the cache holds no entries
    #[error("cannot evict from an empty cache")]
    EmptyCache,

    /// Cache was constructed with a capacity below the minimum of 1
    #[error("cache capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
