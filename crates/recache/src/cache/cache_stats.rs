//! # Cache Statistics

use core::sync::atomic::{AtomicUsize, Ordering};

/// Statistics about a [`PatternCache`](super::PatternCache).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached patterns.
    pub size: usize,

    /// Lookups served from an existing entry.
    pub hits: usize,

    /// Successful compiler invocations; one per entry.
    pub compiles: usize,

    /// Failed compiler invocations; failures are never cached.
    pub failures: usize,
}

impl CacheStats {
    /// Total number of `get` calls.
    pub fn lookups(&self) -> usize {
        self.hits + self.compiles + self.failures
    }

    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 1.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

/// Lock-free counters behind [`CacheStats`].
#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    hits: AtomicUsize,
    compiles: AtomicUsize,
    failures: AtomicUsize,
}

impl CacheCounters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_compile(&self) {
        self.compiles.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(
        &self,
        size: usize,
    ) -> CacheStats {
        CacheStats {
            size,
            hits: self.hits.load(Ordering::Relaxed),
            compiles: self.compiles.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
