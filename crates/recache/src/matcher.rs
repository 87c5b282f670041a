//! # Matcher Handles
//!
//! A [`Matcher`] pairs a compiled meta regex (immutable, shareable) with a
//! private search cache (mutable, per handle). Cloning a handle shares the
//! compiled program but never the cache; this is what lets the pattern cache
//! hand out clones of one canonical instance to many threads.
//!
//! The search cache is created on a handle's first search, so the canonical
//! instance held by a cache never allocates one.

use core::{fmt, ops::Range};
use std::sync::Arc;

use regex_automata::{Input, meta, util::iter::Searcher};

use crate::SyntaxMode;

/// An independently owned, ready-to-use compiled matcher.
///
/// Matching takes `&mut self`: the handle's search cache is updated during a
/// search. Give each thread its own handle (clone it) rather than sharing one.
pub struct Matcher {
    pattern: Arc<str>,
    mode: SyntaxMode,
    regex: meta::Regex,
    cache: Option<meta::Cache>,
}

impl Matcher {
    pub(crate) fn new(
        pattern: &str,
        mode: SyntaxMode,
        regex: meta::Regex,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
            regex,
            cache: None,
        }
    }

    fn search_parts(&mut self) -> (&meta::Regex, &mut meta::Cache) {
        let cache = self.cache.get_or_insert_with(|| self.regex.create_cache());
        (&self.regex, cache)
    }

    /// Get the source pattern text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Get the [`SyntaxMode`] this was compiled under.
    pub fn mode(&self) -> SyntaxMode {
        self.mode
    }

    /// The number of capture groups, including the implicit whole-match group.
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    /// Heap memory, in bytes, held by this handle's search cache.
    ///
    /// Zero until the handle's first search.
    pub fn memory_usage(&self) -> usize {
        self.cache.as_ref().map_or(0, meta::Cache::memory_usage)
    }

    /// Does the pattern match anywhere in `haystack`?
    pub fn is_match<H>(
        &mut self,
        haystack: &H,
    ) -> bool
    where
        H: AsRef<[u8]> + ?Sized,
    {
        let input = Input::new(haystack).earliest(true);
        let (regex, cache) = self.search_parts();
        regex.search_half_with(cache, &input).is_some()
    }

    /// Does the pattern match anywhere in `text`?
    pub fn is_match_str(
        &mut self,
        text: &str,
    ) -> bool {
        self.is_match(text)
    }

    /// Does the pattern match anywhere in a stream of characters?
    ///
    /// The stream is drained into a buffer before searching, so it must be
    /// finite; an unbounded stream never returns, even if it matches early.
    ///
    /// ```rust
    /// let mut re = recache::compile("b+")?;
    /// assert!(re.is_match_reader("abc".chars()));
    ///
    /// // Bound an endless stream before handing it over.
    /// assert!(re.is_match_reader("ab".chars().cycle().take(64)));
    /// # Ok::<(), recache::SyntaxError>(())
    /// ```
    pub fn is_match_reader<R>(
        &mut self,
        reader: R,
    ) -> bool
    where
        R: IntoIterator<Item = char>,
    {
        let text: String = reader.into_iter().collect();
        self.is_match_str(&text)
    }

    /// Find the leftmost-first match in `haystack`.
    ///
    /// ## Returns
    /// The byte range of the match, if any.
    ///
    /// ## POSIX
    /// Spans are leftmost-first in both modes. A [`SyntaxMode::Posix`] handle
    /// does not report the POSIX leftmost-longest span; match / no-match
    /// results are the same either way.
    ///
    /// ```rust
    /// let mut re = recache::compile_posix("a|ab")?;
    /// assert_eq!(re.find("ab"), Some(0..1));
    /// # Ok::<(), recache::SyntaxError>(())
    /// ```
    pub fn find<H>(
        &mut self,
        haystack: &H,
    ) -> Option<Range<usize>>
    where
        H: AsRef<[u8]> + ?Sized,
    {
        let (regex, cache) = self.search_parts();
        regex
            .search_with(cache, &Input::new(haystack))
            .map(|m| m.range())
    }

    /// Find the leftmost-first match in `text`.
    ///
    /// ## Returns
    /// The matched substring, if any.
    ///
    /// ## POSIX
    /// Leftmost-first in both modes; see [`Matcher::find`].
    pub fn find_str<'h>(
        &mut self,
        text: &'h str,
    ) -> Option<&'h str> {
        self.find(text).map(|range| &text[range])
    }

    /// Iterate over successive non-overlapping matches in `haystack`.
    ///
    /// The iterator borrows this handle's search cache for its lifetime.
    ///
    /// ## POSIX
    /// Leftmost-first in both modes; see [`Matcher::find`].
    pub fn find_iter<'m, 'h, H>(
        &'m mut self,
        haystack: &'h H,
    ) -> FindMatches<'m, 'h>
    where
        H: AsRef<[u8]> + ?Sized,
    {
        let (regex, cache) = self.search_parts();
        FindMatches {
            regex,
            cache,
            searcher: Searcher::new(Input::new(haystack)),
        }
    }
}

impl Clone for Matcher {
    /// Share the compiled program; the clone builds its own search cache.
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            mode: self.mode,
            regex: self.regex.clone(),
            cache: None,
        }
    }
}

impl PartialEq for Matcher {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.mode == other.mode && self.pattern == other.pattern
    }
}

impl Eq for Matcher {}

impl fmt::Debug for Matcher {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("mode", &self.mode)
            .finish()
    }
}

impl fmt::Display for Matcher {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Iterator over non-overlapping match ranges; see [`Matcher::find_iter`].
pub struct FindMatches<'m, 'h> {
    regex: &'m meta::Regex,
    cache: &'m mut meta::Cache,
    searcher: Searcher<'h>,
}

impl<'m, 'h> Iterator for FindMatches<'m, 'h> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            regex,
            cache,
            searcher,
        } = self;
        searcher
            .advance(|input| Ok(regex.search_with(cache, input)))
            .map(|m| m.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegexCompiler;

    fn compile(pattern: &str) -> Matcher {
        RegexCompiler::default()
            .compile_pattern(pattern, SyntaxMode::Standard)
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        let re = compile(r"(a)(b)?");
        assert_eq!(re.as_str(), r"(a)(b)?");
        assert_eq!(re.mode(), SyntaxMode::Standard);
        assert_eq!(re.captures_len(), 3);
        assert_eq!(re.to_string(), r"(a)(b)?");
        assert_eq!(
            format!("{re:?}"),
            r#"Matcher { pattern: "(a)(b)?", mode: Standard }"#
        );
    }

    #[test]
    fn test_match_inputs() {
        let mut re = compile(r"[0-9]+");

        assert!(re.is_match(b"abc 123".as_slice()));
        assert!(!re.is_match(b"abc".as_slice()));
        assert!(re.is_match(&[0xFF, b'7'][..]));

        assert!(re.is_match_str("x9"));
        assert!(!re.is_match_str("x"));

        assert!(re.is_match_reader("no digits then 4".chars()));
        assert!(!re.is_match_reader("none".chars()));
    }

    #[test]
    fn test_find() {
        let mut re = compile(r"[a-z]+");
        assert_eq!(re.find("12 abc 34"), Some(3..6));
        assert_eq!(re.find_str("12 abc 34"), Some("abc"));
        assert_eq!(re.find("1234"), None);

        let spans: Vec<_> = re.find_iter("ab 12 cd ef").collect();
        assert_eq!(spans, vec![0..2, 6..8, 9..11]);
    }

    #[test]
    fn test_find_iter_empty_matches() {
        let mut re = compile(r"a*");
        let reference = regex::Regex::new(r"a*").unwrap();

        for text in ["baa", "bab", "", "aaa", "b\u{e9}a"] {
            let spans: Vec<_> = re.find_iter(text).collect();
            let expected: Vec<_> = reference.find_iter(text).map(|m| m.range()).collect();
            assert_eq!(spans, expected, "{text:?}");
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = compile(r"\w+\s+\w+");
        let mut b = a.clone();

        assert_eq!(a, b);

        // Warm one handle's cache; clones start without one.
        assert!(a.is_match_str("hello world"));
        assert!(a.memory_usage() > 0);
        assert_eq!(a.clone().memory_usage(), 0);
        assert_eq!(b.memory_usage(), 0);

        // Interleaved iteration over the two handles.
        let text = "aa bb cc dd";
        let mut ia = a.find_iter(text);
        let first_a = ia.next();
        let all_b: Vec<_> = b.find_iter(text).collect();
        assert_eq!(first_a, Some(0..5));
        assert_eq!(ia.next(), Some(6..11));
        assert_eq!(all_b, vec![0..5, 6..11]);
    }

    #[test]
    fn test_search_cache_is_lazy() {
        let mut re = compile(r"[a-z]+\d");
        assert_eq!(re.memory_usage(), 0);

        assert_eq!(re.find("ab1"), Some(0..3));
        assert!(re.memory_usage() > 0);
    }

    #[test]
    fn test_posix_spans_are_leftmost_first() {
        let mut re = RegexCompiler::default()
            .compile_pattern("a|ab", SyntaxMode::Posix)
            .unwrap();
        assert!(re.is_match_str("ab"));
        assert_eq!(re.find_str("ab"), Some("a"));
    }

    #[test]
    fn test_mode_in_equality() {
        let standard = compile("a");
        let posix = RegexCompiler::default()
            .compile_pattern("a", SyntaxMode::Posix)
            .unwrap();
        assert_ne!(standard, posix);
    }
}
