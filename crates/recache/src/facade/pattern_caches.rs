//! # Standard + POSIX Cache Pair

use core::fmt;

use crate::{
    Matcher,
    PatternCache,
    RegexCompiler,
    SyntaxMode,
    compiler::PatternCompiler,
    facade::quote,
};

/// A pair of caches, one per [`SyntaxMode`], with the compile / match entry points.
///
/// Construct one per application context and pass it to the code that needs it;
/// [`global()`](super::global) holds a process-wide instance for drop-in use.
pub struct PatternCaches<C = RegexCompiler>
where
    C: PatternCompiler,
{
    standard: PatternCache<C>,
    posix: PatternCache<C>,
}

impl PatternCaches<RegexCompiler> {
    /// Create an empty pair using the default [`RegexCompiler`].
    pub fn new() -> Self {
        Self::with_compiler(RegexCompiler::default())
    }
}

impl Default for PatternCaches<RegexCompiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PatternCaches<C>
where
    C: PatternCompiler + Clone,
{
    /// Create an empty pair sharing one compiler configuration.
    pub fn with_compiler(compiler: C) -> Self {
        Self::with_compilers(compiler.clone(), compiler)
    }
}

impl<C> PatternCaches<C>
where
    C: PatternCompiler,
{
    /// Create an empty pair with a compiler per mode.
    ///
    /// ## Arguments
    /// * `standard` - the compiler for the [`SyntaxMode::Standard`] cache.
    /// * `posix` - the compiler for the [`SyntaxMode::Posix`] cache.
    pub fn with_compilers(
        standard: C,
        posix: C,
    ) -> Self {
        Self {
            standard: PatternCache::with_compiler(SyntaxMode::Standard, standard),
            posix: PatternCache::with_compiler(SyntaxMode::Posix, posix),
        }
    }

    /// Get the [`SyntaxMode::Standard`] cache.
    pub fn standard(&self) -> &PatternCache<C> {
        &self.standard
    }

    /// Get the [`SyntaxMode::Posix`] cache.
    pub fn posix(&self) -> &PatternCache<C> {
        &self.posix
    }

    /// Get the cache for `mode`.
    pub fn cache(
        &self,
        mode: SyntaxMode,
    ) -> &PatternCache<C> {
        match mode {
            SyntaxMode::Standard => &self.standard,
            SyntaxMode::Posix => &self.posix,
        }
    }

    /// Compile a pattern, through the standard cache.
    pub fn compile(
        &self,
        pattern: &str,
    ) -> Result<C::Matcher, C::Error> {
        self.standard.get(pattern)
    }

    /// Compile a POSIX ERE pattern, through the POSIX cache.
    pub fn compile_posix(
        &self,
        pattern: &str,
    ) -> Result<C::Matcher, C::Error> {
        self.posix.get(pattern)
    }

    /// Compile a pattern, through the standard cache.
    ///
    /// ## Panics
    /// If the pattern does not compile; for trusted, constant pattern text.
    #[track_caller]
    pub fn must_compile(
        &self,
        pattern: &str,
    ) -> C::Matcher {
        must_get(&self.standard, pattern)
    }

    /// Compile a POSIX ERE pattern, through the POSIX cache.
    ///
    /// ## Panics
    /// If the pattern does not compile; for trusted, constant pattern text.
    #[track_caller]
    pub fn must_compile_posix(
        &self,
        pattern: &str,
    ) -> C::Matcher {
        must_get(&self.posix, pattern)
    }
}

impl<C> PatternCaches<C>
where
    C: PatternCompiler<Matcher = Matcher>,
{
    /// Does `pattern` match anywhere in the byte sequence `haystack`?
    pub fn is_match<H>(
        &self,
        pattern: &str,
        haystack: &H,
    ) -> Result<bool, C::Error>
    where
        H: AsRef<[u8]> + ?Sized,
    {
        Ok(self.compile(pattern)?.is_match(haystack))
    }

    /// Does `pattern` match anywhere in a stream of characters?
    pub fn is_match_reader<R>(
        &self,
        pattern: &str,
        reader: R,
    ) -> Result<bool, C::Error>
    where
        R: IntoIterator<Item = char>,
    {
        Ok(self.compile(pattern)?.is_match_reader(reader))
    }

    /// Does `pattern` match anywhere in `text`?
    pub fn is_match_str(
        &self,
        pattern: &str,
        text: &str,
    ) -> Result<bool, C::Error> {
        Ok(self.compile(pattern)?.is_match_str(text))
    }
}

#[track_caller]
fn must_get<C>(
    cache: &PatternCache<C>,
    pattern: &str,
) -> C::Matcher
where
    C: PatternCompiler,
{
    match cache.get(pattern) {
        Ok(matcher) => matcher,
        Err(err) => panic!(
            "recache: {}({}): {}",
            cache.mode().compile_fn_name(),
            quote(pattern),
            err
        ),
    }
}

impl<C> fmt::Debug for PatternCaches<C>
where
    C: PatternCompiler + fmt::Debug,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("PatternCaches")
            .field("standard", &self.standard)
            .field("posix", &self.posix)
            .finish()
    }
}
