//! # `recache` Compiled Pattern Cache
//!
//! A memoizing cache for compiled regular expressions, in standard and
//! POSIX ERE syntax.
//!
//! Compiling a pattern is far more expensive than matching with it; call sites
//! that build the same pattern text over and over can route through a cache
//! instead. Each distinct pattern text is compiled once per [`SyntaxMode`], and
//! every caller gets its own [`Matcher`] handle: a clone that shares the compiled
//! program but owns its search state, so concurrent matches never contend.
//!
//! See:
//! * [`PatternCache`] - the keyed cache for one [`SyntaxMode`].
//! * [`PatternCaches`] - the Standard + POSIX pair, with compile / match entry points.
//! * [`compile`], [`must_compile`], [`is_match_str`], ... - the same entry points
//!   over a process-wide pair.
//! * [`PatternCompiler`] - the compiler seam; [`RegexCompiler`] is the default.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//!
//! #### feature: ``foldhash``
//!
//! This swaps the pattern map's HashMap implementation for ``foldhash``.
//!
//! This is done by the ``types::CommonHash{*}`` type alias machinery.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation on the cache lookup path.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use recache::PatternCaches;
//!
//! let caches = PatternCaches::new();
//!
//! let mut re = caches.compile("^[hc]at")?;
//! assert!(re.is_match_str("cat"));
//! assert!(!re.is_match_str("hot"));
//!
//! // Backreferences are not supported in either syntax.
//! assert!(caches.compile_posix(r"^^^[ddd]!!\1\1\1\1").is_err());
//!
//! // The process-wide entry points share one pair of caches.
//! assert!(recache::is_match_str(r"\d+", "route 66")?);
//! # Ok::<(), recache::SyntaxError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod cache;
pub mod compiler;
pub mod errors;
pub mod facade;
pub mod matcher;
pub mod syntax_mode;
pub mod types;

#[doc(inline)]
pub use cache::{CacheStats, PatternCache};
#[doc(inline)]
pub use compiler::{CompileOptions, PatternCompiler, RegexCompiler};
#[doc(inline)]
pub use errors::{PosixViolation, RecacheResult, SyntaxError};
#[doc(inline)]
pub use facade::{
    PatternCaches,
    compile,
    compile_posix,
    global,
    is_match,
    is_match_reader,
    is_match_str,
    must_compile,
    must_compile_posix,
    quote,
};
#[doc(inline)]
pub use matcher::{FindMatches, Matcher};
#[doc(inline)]
pub use syntax_mode::SyntaxMode;
