//! # Pattern Compiler Trait

use std::sync::Arc;

use crate::SyntaxMode;

/// A pattern compilation engine.
///
/// The cache treats the compiler as opaque: it calls [`PatternCompiler::compile`]
/// at most once per successfully compiled `(mode, pattern)` pair and hands out
/// clones of the result.
///
/// `Matcher::clone()` must produce a handle whose per-match state is independent
/// of the original; the cache relies on this to share the canonical instance.
pub trait PatternCompiler: Send + Sync {
    /// The compiled matcher handle type.
    type Matcher: Clone + Send;

    /// The compile error type.
    type Error: core::fmt::Display;

    /// Compile `pattern` under `mode`.
    fn compile(
        &self,
        pattern: &str,
        mode: SyntaxMode,
    ) -> Result<Self::Matcher, Self::Error>;
}

impl<C> PatternCompiler for Arc<C>
where
    C: PatternCompiler + ?Sized,
{
    type Matcher = C::Matcher;
    type Error = C::Error;

    fn compile(
        &self,
        pattern: &str,
        mode: SyntaxMode,
    ) -> Result<Self::Matcher, Self::Error> {
        (**self).compile(pattern, mode)
    }
}

impl<C> PatternCompiler for &C
where
    C: PatternCompiler + ?Sized,
{
    type Matcher = C::Matcher;
    type Error = C::Error;

    fn compile(
        &self,
        pattern: &str,
        mode: SyntaxMode,
    ) -> Result<Self::Matcher, Self::Error> {
        (**self).compile(pattern, mode)
    }
}
