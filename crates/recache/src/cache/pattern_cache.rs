//! # Keyed Pattern Cache

use core::fmt;

use parking_lot::Mutex;

use crate::{
    RegexCompiler,
    SyntaxMode,
    cache::cache_stats::{CacheCounters, CacheStats},
    compiler::PatternCompiler,
    types::{CommonHashMap, hash_map_new, hash_map_with_capacity},
};

/// A memoizing cache of compiled patterns for one [`SyntaxMode`].
///
/// Each distinct pattern text is compiled at most once (successfully); the
/// compiled result is stored as the canonical matcher and every caller,
/// including the one that triggered the compile, receives a clone of it.
///
/// A single lock guards lookup, compile-on-miss, and store. Concurrent requests
/// for an unseen pattern serialize on the lock; the first compiles, the rest
/// find the stored entry. Failed compiles are returned to the caller and not
/// stored, so a later request compiles again.
///
/// Entries are never evicted.
///
/// ## Style Hints
///
/// Instance names should prefer `${mode}_cache`,
/// for example, `standard_cache`, `posix_cache`.
pub struct PatternCache<C = RegexCompiler>
where
    C: PatternCompiler,
{
    mode: SyntaxMode,
    compiler: C,
    entries: Mutex<CommonHashMap<String, C::Matcher>>,
    counters: CacheCounters,
}

impl PatternCache<RegexCompiler> {
    /// Create an empty cache using the default [`RegexCompiler`].
    pub fn new(mode: SyntaxMode) -> Self {
        Self::with_compiler(mode, RegexCompiler::default())
    }
}

impl<C> PatternCache<C>
where
    C: PatternCompiler,
{
    /// Create an empty cache.
    ///
    /// ## Arguments
    /// * `mode` - the grammar every pattern in this cache is compiled under.
    /// * `compiler` - the compiler to delegate to.
    pub fn with_compiler(
        mode: SyntaxMode,
        compiler: C,
    ) -> Self {
        Self {
            mode,
            compiler,
            entries: Mutex::new(hash_map_new()),
            counters: CacheCounters::default(),
        }
    }

    /// Create an empty cache, pre-sized for `capacity` patterns.
    pub fn with_capacity(
        mode: SyntaxMode,
        compiler: C,
        capacity: usize,
    ) -> Self {
        Self {
            entries: Mutex::new(hash_map_with_capacity(capacity)),
            ..Self::with_compiler(mode, compiler)
        }
    }

    /// Get the cache's [`SyntaxMode`].
    pub fn mode(&self) -> SyntaxMode {
        self.mode
    }

    /// Get the underlying compiler.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Get a matcher for `pattern`, compiling it on first request.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text; the key, compared exactly.
    ///
    /// ## Returns
    /// A clone of the canonical matcher, or the compiler's error verbatim.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self), fields(mode = %self.mode))
    )]
    pub fn get(
        &self,
        pattern: &str,
    ) -> Result<C::Matcher, C::Error> {
        // The guard is released on every exit, including a panicking compiler.
        let mut entries = self.entries.lock();

        if let Some(canonical) = entries.get(pattern) {
            self.counters.record_hit();
            log::trace!("{} cache hit: {:?}", self.mode, pattern);
            return Ok(canonical.clone());
        }

        match self.compiler.compile(pattern, self.mode) {
            Ok(canonical) => {
                self.counters.record_compile();
                log::debug!("{} cache compiled: {:?}", self.mode, pattern);

                let handle = canonical.clone();
                entries.insert(pattern.to_string(), canonical);
                Ok(handle)
            }
            Err(err) => {
                self.counters.record_failure();
                log::debug!("{} cache compile failed: {:?}: {}", self.mode, pattern, err);
                Err(err)
            }
        }
    }

    /// Is `pattern` already compiled and stored?
    pub fn contains(
        &self,
        pattern: &str,
    ) -> bool {
        self.entries.lock().contains_key(pattern)
    }

    /// Get the number of stored patterns.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the stored pattern texts, in no particular order.
    pub fn patterns(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let size = self.len();
        self.counters.snapshot(size)
    }
}

impl<C> fmt::Debug for PatternCache<C>
where
    C: PatternCompiler + fmt::Debug,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("PatternCache")
            .field("mode", &self.mode)
            .field("compiler", &self.compiler)
            .field("len", &self.len())
            .finish()
    }
}
