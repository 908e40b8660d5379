//! Result cache: bounded moka store (TinyLFU admission, optional TTL) keyed
//! by a fingerprint of the full text and the canonical configuration.

pub mod monitor;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::sync::Cache;
use quill_core::{CacheConfig, EngineConfig};
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

use crate::engine::types::EngineResult;

pub use monitor::{PerformanceMonitor, PerformanceStats, RuleTiming};

/// Identifies a (text, configuration) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text_hash: u128,
    text_len: usize,
    config_hash: u64,
}

impl CacheKey {
    pub fn new(text: &str, config: &EngineConfig) -> Self {
        Self {
            text_hash: xxh3_128(text.as_bytes()),
            text_len: text.len(),
            config_hash: xxh3_64(config.canonical_json().as_bytes()),
        }
    }
}

/// A memoized result.
#[derive(Debug)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub result: Arc<EngineResult>,
    created_at: Instant,
    access_count: AtomicU64,
}

impl CacheEntry {
    fn new(key: CacheKey, result: EngineResult) -> Self {
        Self {
            key,
            result: Arc::new(result),
            created_at: Instant::now(),
            access_count: AtomicU64::new(0),
        }
    }

    /// Time since the result was computed.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Number of cache hits served from this entry.
    pub fn access_count(&self) -> u64 {
        self.access_count.load(Ordering::Relaxed)
    }
}

/// Outcome of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Hit,
    Miss,
}

/// Memoizing store for engine results.
pub struct ResultCache {
    inner: Option<Cache<CacheKey, Arc<CacheEntry>>>,
}

impl ResultCache {
    pub fn new(config: &CacheConfig) -> Self {
        if !config.effective_enabled() {
            return Self { inner: None };
        }
        let mut builder = Cache::builder().max_capacity(config.effective_capacity());
        let ttl = config.effective_ttl_secs();
        if ttl > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }
        Self { inner: Some(builder.build()) }
    }

    /// Return the cached result for `key`, computing and storing it on a
    /// miss. Concurrent callers with the same key share one computation.
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> (Arc<EngineResult>, Lookup)
    where
        F: FnOnce() -> EngineResult,
    {
        let Some(cache) = &self.inner else {
            return (Arc::new(compute()), Lookup::Miss);
        };

        let entry = cache
            .entry(key)
            .or_insert_with(|| Arc::new(CacheEntry::new(key, compute())));
        if entry.is_fresh() {
            return (Arc::clone(&entry.value().result), Lookup::Miss);
        }
        let cached = entry.into_value();
        cached.access_count.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(
            age_ms = cached.age().as_millis() as u64,
            hits = cached.access_count(),
            "cache hit"
        );
        (Arc::clone(&cached.result), Lookup::Hit)
    }

    /// Look up an entry without computing anything.
    pub fn peek(&self, key: &CacheKey) -> Option<Arc<CacheEntry>> {
        self.inner.as_ref()?.get(key)
    }

    pub fn clear(&self) {
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
            cache.run_pending_tasks();
        }
    }

    /// Approximate number of stored entries.
    pub fn entry_count(&self) -> u64 {
        match &self.inner {
            Some(cache) => {
                cache.run_pending_tasks();
                cache.entry_count()
            }
            None => 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::EngineConfigOverrides;

    use crate::engine::types::QualityStats;

    fn empty_result(rules: usize) -> EngineResult {
        EngineResult {
            suggestions: Vec::new(),
            total_rules_processed: rules,
            execution_time_ms: 0.0,
            quality_stats: QualityStats::default(),
            category_breakdown: Default::default(),
        }
    }

    #[test]
    fn key_depends_on_full_text_and_config() {
        let config = EngineConfig::default();
        let long_a = format!("{}a", "x".repeat(500));
        let long_b = format!("{}b", "x".repeat(500));
        assert_ne!(CacheKey::new(&long_a, &config), CacheKey::new(&long_b, &config));

        let other = config.merge(&EngineConfigOverrides::default().with_min_confidence(90));
        assert_ne!(CacheKey::new("same", &config), CacheKey::new("same", &other));
        assert_eq!(CacheKey::new("same", &config), CacheKey::new("same", &config.clone()));
    }

    #[test]
    fn second_lookup_is_a_hit_and_bumps_access_count() {
        let cache = ResultCache::default();
        let key = CacheKey::new("text", &EngineConfig::default());
        let (first, lookup) = cache.get_or_compute(key, || empty_result(3));
        assert_eq!(lookup, Lookup::Miss);
        let (second, lookup) = cache.get_or_compute(key, || panic!("must not recompute"));
        assert_eq!(lookup, Lookup::Hit);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.peek(&key).unwrap().access_count(), 1);
    }

    #[test]
    fn entry_age_grows_from_insertion() {
        let cache = ResultCache::default();
        let key = CacheKey::new("text", &EngineConfig::default());
        let before = Instant::now();
        cache.get_or_compute(key, || empty_result(1));
        let entry = cache.peek(&key).unwrap();
        assert!(entry.age() <= before.elapsed());
        assert!(cache.is_enabled());
    }

    #[test]
    fn disabled_cache_always_computes() {
        let cache = ResultCache::new(&CacheConfig { disabled: Some(true), ..Default::default() });
        let key = CacheKey::new("text", &EngineConfig::default());
        let (_, a) = cache.get_or_compute(key, || empty_result(1));
        let (_, b) = cache.get_or_compute(key, || empty_result(1));
        assert_eq!((a, b), (Lookup::Miss, Lookup::Miss));
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn clear_empties_the_store() {
        let cache = ResultCache::default();
        let key = CacheKey::new("text", &EngineConfig::default());
        cache.get_or_compute(key, || empty_result(1));
        assert_eq!(cache.entry_count(), 1);
        cache.clear();
        assert_eq!(cache.entry_count(), 0);
        assert!(cache.peek(&key).is_none());
    }
}
