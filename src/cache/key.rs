//! Key Validation Module
//!
//! Validates candidate keys against the allowed character set and length
//! bound. The cache operations themselves do not enforce this; it is an
//! explicit pre-check offered to callers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cache::MAX_KEY_LENGTH;
use crate::error::{CacheError, Result};

// Key must consist of alphanumeric characters, '-', '_' or '.', and must
// start and end with an alphanumeric character.
static KEY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?$").expect("key regex must compile")
});

// == Validate Key ==
/// Checks that a key meets the format and length requirements.
///
/// A valid key is 1 to 250 bytes long, starts and ends with an alphanumeric
/// character, and may contain `-`, `_` or `.` in between. A single
/// alphanumeric character is valid on its own.
///
/// # Arguments
/// * `key` - The candidate key to validate
pub fn validate_key(key: &str) -> Result<()> {
    if key.len() <= MAX_KEY_LENGTH && KEY_REGEX.is_match(key) {
        Ok(())
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}
