//! # Compile and Match Entry Points
//!
//! * [`PatternCaches`] - an explicitly constructed Standard + POSIX cache pair.
//! * [`global()`] and the free functions - the same operations over a
//!   process-wide pair, for drop-in use.
//!
//! | Function | Cache |
//! |---|---|
//! | [`compile`] | standard |
//! | [`compile_posix`] | POSIX |
//! | [`must_compile`] | standard; panics on error |
//! | [`must_compile_posix`] | POSIX; panics on error |
//! | [`is_match`] | standard; byte sequence |
//! | [`is_match_reader`] | standard; character stream |
//! | [`is_match_str`] | standard; string |

mod global;
mod pattern_caches;
mod quote;

#[doc(inline)]
pub use global::*;
#[doc(inline)]
pub use pattern_caches::PatternCaches;
#[doc(inline)]
pub use quote::{can_backquote, quote};
