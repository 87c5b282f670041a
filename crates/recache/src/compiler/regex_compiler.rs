//! # Default Regex Compiler

use regex_automata::meta;
use regex_syntax::{ast::parse::ParserBuilder, hir::translate::TranslatorBuilder};

use crate::{
    Matcher,
    PatternCompiler,
    RecacheResult,
    SyntaxMode,
    compiler::{CompileOptions, posix},
};

/// The default [`PatternCompiler`], backed by `regex-syntax` and the
/// `regex-automata` meta engine.
///
/// * [`SyntaxMode::Standard`] - the `regex` crate grammar.
/// * [`SyntaxMode::Posix`] - the same grammar restricted to POSIX ERE;
///   `^` and `$` match at line boundaries, and negated bracket expressions
///   never match `\n`.
///
/// Backreferences are rejected in both modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegexCompiler {
    options: CompileOptions,
}

impl From<CompileOptions> for RegexCompiler {
    fn from(options: CompileOptions) -> Self {
        Self::new(options)
    }
}

impl RegexCompiler {
    /// Create a new compiler.
    ///
    /// ## Arguments
    /// * `options` - the compile options.
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Get the compile options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a pattern, bypassing any cache.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern text.
    /// * `mode` - the grammar to compile under.
    ///
    /// ## Returns
    /// A fresh [`Matcher`], or the [`SyntaxError`](crate::SyntaxError) from the
    /// parser, the POSIX grammar check, or the engine builder.
    pub fn compile_pattern(
        &self,
        pattern: &str,
        mode: SyntaxMode,
    ) -> RecacheResult<Matcher> {
        let mut ast = ParserBuilder::new()
            .nest_limit(self.options.nest_limit())
            .octal(false)
            .build()
            .parse(pattern)?;

        if mode.is_posix() {
            posix::check_ere(&ast)?;
            posix::exclude_newline(&mut ast);
        }

        let hir = TranslatorBuilder::new()
            .multi_line(mode.is_posix())
            .build()
            .translate(pattern, &ast)?;

        let regex = meta::Regex::builder()
            .configure(self.options.meta_config())
            .build_from_hir(&hir)?;

        Ok(Matcher::new(pattern, mode, regex))
    }
}

impl PatternCompiler for RegexCompiler {
    type Matcher = Matcher;
    type Error = crate::SyntaxError;

    fn compile(
        &self,
        pattern: &str,
        mode: SyntaxMode,
    ) -> RecacheResult<Matcher> {
        self.compile_pattern(pattern, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PosixViolation, SyntaxError};

    #[test]
    fn test_compile_standard() {
        let compiler = RegexCompiler::default();
        let mut re = compiler
            .compile_pattern("^[hc]at", SyntaxMode::Standard)
            .unwrap();

        assert_eq!(re.as_str(), "^[hc]at");
        assert_eq!(re.mode(), SyntaxMode::Standard);
        assert!(re.is_match_str("cat"));
        assert!(re.is_match_str("hat"));
        assert!(!re.is_match_str("hot"));
    }

    #[test]
    fn test_backreferences_rejected() {
        let compiler = RegexCompiler::default();
        for mode in [SyntaxMode::Standard, SyntaxMode::Posix] {
            let err = compiler
                .compile_pattern(r"^^^[ddd]!!\1\1\1\1", mode)
                .unwrap_err();
            assert!(matches!(err, SyntaxError::Parse(_)), "{mode}: {err}");
            assert!(err.to_string().contains("backreferences are not supported"));
        }
    }

    #[test]
    fn test_posix_rejects_perl_syntax() {
        let compiler = RegexCompiler::default();

        assert!(compiler.compile_pattern(r"\d+", SyntaxMode::Standard).is_ok());

        let err = compiler
            .compile_pattern(r"\d+", SyntaxMode::Posix)
            .unwrap_err();
        assert_eq!(err.posix_violation(), Some(PosixViolation::PerlClass));
    }

    #[test]
    fn test_posix_anchors_are_line_anchors() {
        let compiler = RegexCompiler::default();

        let mut standard = compiler.compile_pattern("^b$", SyntaxMode::Standard).unwrap();
        let mut posix = compiler.compile_pattern("^b$", SyntaxMode::Posix).unwrap();

        assert!(!standard.is_match_str("a\nb\nc"));
        assert!(posix.is_match_str("a\nb\nc"));
    }

    #[test]
    fn test_posix_negated_classes_exclude_newline() {
        let compiler = RegexCompiler::default();

        let mut standard = compiler.compile_pattern("a[^b]c", SyntaxMode::Standard).unwrap();
        let mut posix = compiler.compile_pattern("a[^b]c", SyntaxMode::Posix).unwrap();

        assert!(standard.is_match_str("a\nc"));
        assert!(!posix.is_match_str("a\nc"));
        assert!(posix.is_match_str("axc"));
        assert!(!posix.is_match_str("abc"));

        // Inside groups and repetition too.
        let mut nested = compiler.compile_pattern("(x[^y]+)|z", SyntaxMode::Posix).unwrap();
        assert!(!nested.is_match_str("x\n"));
        assert!(nested.is_match_str("xa\n"));

        // Positive classes keep their newline.
        let mut space = compiler
            .compile_pattern("a[[:space:]]c", SyntaxMode::Posix)
            .unwrap();
        assert!(space.is_match_str("a\nc"));
    }

    #[test]
    fn test_nest_limit() {
        let compiler = RegexCompiler::new(CompileOptions::default().with_nest_limit(2));
        assert!(compiler.compile_pattern("(a)", SyntaxMode::Standard).is_ok());

        let err = compiler
            .compile_pattern("((((a))))", SyntaxMode::Standard)
            .unwrap_err();
        assert!(matches!(err, SyntaxError::Parse(_)));
    }

    #[test]
    fn test_size_limit() {
        let compiler = RegexCompiler::new(CompileOptions::default().with_size_limit(64));
        let err = compiler
            .compile_pattern(r"\w{100}", SyntaxMode::Standard)
            .unwrap_err();
        assert!(matches!(err, SyntaxError::Build(_)));
    }
}
