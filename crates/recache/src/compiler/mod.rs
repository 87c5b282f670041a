//! # Pattern Compilers
//!
//! The cache never compiles patterns itself; it delegates to a [`PatternCompiler`].
//!
//! * [`PatternCompiler`] - the compiler seam; tests inject counting or failing compilers.
//! * [`RegexCompiler`] - the default engine, configured by [`CompileOptions`].
//! * [`posix`] - the POSIX ERE grammar check used by [`SyntaxMode::Posix`](crate::SyntaxMode::Posix).

mod compile_options;
mod pattern_compiler;
mod regex_compiler;

pub mod posix;

#[doc(inline)]
pub use compile_options::*;
#[doc(inline)]
pub use pattern_compiler::*;
#[doc(inline)]
pub use regex_compiler::*;
