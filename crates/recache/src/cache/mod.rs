//! # Pattern Caches
//!
//! * [`PatternCache`] - one mode's keyed cache of canonical matchers.
//! * [`CacheStats`] - hit / compile / failure counters for a cache.

mod cache_stats;
mod pattern_cache;

#[doc(inline)]
pub use cache_stats::CacheStats;
#[doc(inline)]
pub use pattern_cache::PatternCache;
