//! Result cache configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the memoizing result cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Disable memoization entirely. Default: false.
    pub disabled: Option<bool>,
    /// Maximum number of cached results. Default: 512.
    pub capacity: Option<u64>,
    /// Time-to-live for an entry in seconds. 0 = no expiry. Default: 3600.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    /// Returns whether the cache is enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        !self.disabled.unwrap_or(false)
    }

    /// Returns the effective capacity, defaulting to 512 and never below 1.
    pub fn effective_capacity(&self) -> u64 {
        self.capacity.unwrap_or(512).max(1)
    }

    /// Returns the effective TTL in seconds, defaulting to one hour.
    pub fn effective_ttl_secs(&self) -> u64 {
        self.ttl_secs.unwrap_or(3_600)
    }
}
