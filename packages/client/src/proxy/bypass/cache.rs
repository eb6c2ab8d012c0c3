//! Memoization of compiled bypass rules
//!
//! Rules are keyed by the raw bypass-list string. Compilation for a key
//! happens under that key's shard entry lock, so concurrent first lookups
//! compile once; the published rule is an immutable `Arc` shared by every
//! later reader.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::rules::{CompiledBypassRule, split_rules};
use crate::telemetry::CacheStats;

lazy_static::lazy_static! {
    static ref SHARED_CACHE: Arc<BypassCache> = Arc::new(BypassCache::new());
}

/// Returns the process-wide rule cache.
pub fn shared_cache() -> Arc<BypassCache> {
    Arc::clone(&SHARED_CACHE)
}

/// Thread-safe cache of compiled bypass rules
///
/// Entries are never evicted: the cache holds one rule per distinct list
/// string it has seen. Lists are meant to come from configuration; callers
/// passing arbitrary per-request lists should give those their own cache
/// (see [`super::BypassMatcher::with_cache`]) rather than the shared one.
#[derive(Debug, Default)]
pub struct BypassCache {
    rules: DashMap<String, Arc<CompiledBypassRule>>,
    stats: CacheStats,
}

impl BypassCache {
    pub fn new() -> Self {
        Self {
            rules: DashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Get the compiled rule for `bypass_list`, compiling it on first use
    pub fn get_or_compile(&self, bypass_list: &str) -> Arc<CompiledBypassRule> {
        if let Some(rule) = self.rules.get(bypass_list) {
            self.stats.record_hit();
            return Arc::clone(rule.value());
        }
        self.stats.record_miss();

        let entry = self
            .rules
            .entry(bypass_list.to_owned())
            .or_insert_with(|| Arc::new(self.compile(bypass_list)));
        Arc::clone(entry.value())
    }

    fn compile(&self, bypass_list: &str) -> CompiledBypassRule {
        self.stats.record_compilation();

        let rule = CompiledBypassRule::try_compile(bypass_list).unwrap_or_else(|e| {
            self.stats.record_fallback();
            CompiledBypassRule::fallback(bypass_list, &e)
        });

        debug!(
            target: "proxygate::bypass",
            rules = split_rules(bypass_list).len(),
            wildcard = rule.is_wildcard(),
            "Compiled proxy bypass list"
        );
        rule
    }

    /// Whether a compiled rule exists for `bypass_list`
    pub fn contains(&self, bypass_list: &str) -> bool {
        self.rules.contains_key(bypass_list)
    }

    /// Number of distinct bypass lists compiled so far
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
