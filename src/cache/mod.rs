//! Cache Module
//!
//! Provides a bounded in-memory key-value store with pluggable eviction.

mod entry;
mod key;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::validate_key;
pub use policy::EvictionPolicy;
pub use stats::CacheStats;
pub use store::Cache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 250;
