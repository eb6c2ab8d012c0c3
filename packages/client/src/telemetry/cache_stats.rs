//! Bypass-rule cache statistics
//!
//! Provides `CacheStats` for tracking cache hits, misses and compilations
//! with atomic counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Cache statistics for monitoring
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups answered by an already compiled rule
    pub hits: AtomicU64,
    /// Lookups that found no compiled rule on the fast path
    pub misses: AtomicU64,
    /// Rules actually compiled
    pub compilations: AtomicU64,
    /// Wildcard patterns rejected by the regex engine
    pub fallbacks: AtomicU64,
}

/// Point-in-time copy of [`CacheStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub compilations: u64,
    pub fallbacks: u64,
}

impl CacheStats {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_compilation(&self) {
        self.compilations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get hit rate as percentage
    pub fn hit_rate(&self) -> f64 {
        // Precision loss acceptable for cache hit rate statistics
        #[allow(clippy::cast_precision_loss)]
        let hits = self.hits.load(Ordering::Relaxed) as f64;
        #[allow(clippy::cast_precision_loss)]
        let total = hits + self.misses.load(Ordering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    /// Get statistics snapshot
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            compilations: self.compilations.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }
}
