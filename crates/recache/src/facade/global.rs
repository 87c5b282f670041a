//! # Process-Wide Entry Points
//!
//! Drop-in replacements for compile-and-match call sites that have no
//! [`PatternCaches`] of their own. All of them share one lazily created
//! pair of caches that lives for the rest of the process.

use std::sync::LazyLock;

use crate::{Matcher, PatternCaches, RecacheResult};

static GLOBAL_CACHES: LazyLock<PatternCaches> = LazyLock::new(PatternCaches::new);

/// Get the process-wide [`PatternCaches`].
pub fn global() -> &'static PatternCaches {
    &GLOBAL_CACHES
}

/// Compile a pattern, through the process-wide standard cache.
pub fn compile(pattern: &str) -> RecacheResult<Matcher> {
    global().compile(pattern)
}

/// Compile a POSIX ERE pattern, through the process-wide POSIX cache.
pub fn compile_posix(pattern: &str) -> RecacheResult<Matcher> {
    global().compile_posix(pattern)
}

/// Compile a pattern, through the process-wide standard cache.
///
/// ## Panics
/// If the pattern does not compile, with a message of the form
/// ``recache: Compile(`pattern`): error``.
#[track_caller]
pub fn must_compile(pattern: &str) -> Matcher {
    global().must_compile(pattern)
}

/// Compile a POSIX ERE pattern, through the process-wide POSIX cache.
///
/// ## Panics
/// If the pattern does not compile, with a message of the form
/// ``recache: CompilePOSIX(`pattern`): error``.
#[track_caller]
pub fn must_compile_posix(pattern: &str) -> Matcher {
    global().must_compile_posix(pattern)
}

/// Does `pattern` match anywhere in the byte sequence `haystack`?
pub fn is_match<H>(
    pattern: &str,
    haystack: &H,
) -> RecacheResult<bool>
where
    H: AsRef<[u8]> + ?Sized,
{
    global().is_match(pattern, haystack)
}

/// Does `pattern` match anywhere in a stream of characters?
pub fn is_match_reader<R>(
    pattern: &str,
    reader: R,
) -> RecacheResult<bool>
where
    R: IntoIterator<Item = char>,
{
    global().is_match_reader(pattern, reader)
}

/// Does `pattern` match anywhere in `text`?
pub fn is_match_str(
    pattern: &str,
    text: &str,
) -> RecacheResult<bool> {
    global().is_match_str(pattern, text)
}
