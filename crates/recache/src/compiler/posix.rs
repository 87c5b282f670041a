//! # POSIX ERE Grammar Check
//!
//! The engine parses a superset of POSIX extended regular expressions.
//! POSIX mode parses with the standard grammar, then walks the AST and rejects
//! the Perl extensions that ERE does not have.
//!
//! Accepted: literals, `.`, bracket expressions (including `[[:alpha:]]`),
//! capture groups, alternation, greedy repetition, and the `^` / `$` anchors.
//!
//! A negated bracket expression never matches a newline in POSIX mode;
//! [`exclude_newline`] rewrites the AST so that `[^b]` means `[^b\n]`.

use regex_syntax::ast::{
    self,
    Ast,
    AssertionKind,
    ClassBracketed,
    ClassSet,
    ClassSetItem,
    ClassSetUnion,
    GroupKind,
    Literal,
    LiteralKind,
};

use crate::{PosixViolation, SyntaxError};

/// Check that a parsed pattern only uses POSIX ERE constructs.
///
/// ## Returns
/// The first violation found (in pattern order), as a [`SyntaxError::Posix`].
pub fn check_ere(ast: &Ast) -> Result<(), SyntaxError> {
    ast::visit(ast, EreChecker)
}

/// Add `\n` to every top-level negated bracket expression, so it never matches.
///
/// Positive bracket expressions (`[[:space:]]`, `[a\n]`) are unchanged.
pub fn exclude_newline(ast: &mut Ast) {
    match ast {
        Ast::ClassBracketed(class) if class.negated => {
            let span = class.span;
            let kind = core::mem::replace(&mut class.kind, ClassSet::Item(ClassSetItem::Empty(span)));
            let item = match &kind {
                ClassSet::Item(item) => item.clone(),
                ClassSet::BinaryOp(op) => ClassSetItem::Bracketed(Box::new(ClassBracketed {
                    span,
                    negated: false,
                    kind: ClassSet::BinaryOp(op.clone()),
                })),
            };
            let newline = ClassSetItem::Literal(Literal {
                span,
                kind: LiteralKind::Verbatim,
                c: '\n',
            });
            class.kind = ClassSet::union(ClassSetUnion {
                span,
                items: vec![item, newline],
            });
        }
        Ast::Repetition(rep) => exclude_newline(&mut rep.ast),
        Ast::Group(group) => exclude_newline(&mut group.ast),
        Ast::Alternation(alt) => alt.asts.iter_mut().for_each(exclude_newline),
        Ast::Concat(concat) => concat.asts.iter_mut().for_each(exclude_newline),
        _ => {}
    }
}

struct EreChecker;

fn reject(
    violation: PosixViolation,
    span: &ast::Span,
) -> Result<(), SyntaxError> {
    Err(SyntaxError::Posix {
        violation,
        offset: span.start.offset,
    })
}

impl ast::Visitor for EreChecker {
    type Output = ();
    type Err = SyntaxError;

    fn finish(self) -> Result<(), SyntaxError> {
        Ok(())
    }

    fn visit_pre(
        &mut self,
        ast: &Ast,
    ) -> Result<(), SyntaxError> {
        match ast {
            Ast::Flags(flags) => reject(PosixViolation::Flags, &flags.span),
            Ast::ClassPerl(class) => reject(PosixViolation::PerlClass, &class.span),
            Ast::ClassUnicode(class) => reject(PosixViolation::UnicodeClass, &class.span),
            Ast::Assertion(assertion) => match assertion.kind {
                AssertionKind::StartLine | AssertionKind::EndLine => Ok(()),
                _ => reject(PosixViolation::PerlAssertion, &assertion.span),
            },
            Ast::Repetition(rep) if !rep.greedy => reject(PosixViolation::NonGreedy, &rep.op.span),
            Ast::Group(group) => match &group.kind {
                GroupKind::CaptureIndex(_) => Ok(()),
                GroupKind::CaptureName { .. } => reject(PosixViolation::NamedGroup, &group.span),
                GroupKind::NonCapturing(flags) if flags.items.is_empty() => {
                    reject(PosixViolation::NonCapturingGroup, &group.span)
                }
                GroupKind::NonCapturing(_) => reject(PosixViolation::Flags, &group.span),
            },
            _ => Ok(()),
        }
    }

    fn visit_class_set_item_pre(
        &mut self,
        item: &ClassSetItem,
    ) -> Result<(), SyntaxError> {
        match item {
            ClassSetItem::Perl(class) => reject(PosixViolation::PerlClass, &class.span),
            ClassSetItem::Unicode(class) => reject(PosixViolation::UnicodeClass, &class.span),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pattern: &str) -> Result<(), SyntaxError> {
        let ast = ast::parse::Parser::new().parse(pattern).unwrap();
        check_ere(&ast)
    }

    fn violation(pattern: &str) -> (PosixViolation, usize) {
        match check(pattern).unwrap_err() {
            SyntaxError::Posix { violation, offset } => (violation, offset),
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn test_accepts_ere() {
        for pattern in [
            "^[hc]at$",
            "a|b|c",
            "(ab)+c*d?",
            "x{2,3}",
            "[[:alpha:]][[:digit:]]*",
            "[^a-z]",
            "a.b",
            r"\.\*",
            "",
        ] {
            assert!(check(pattern).is_ok(), "{pattern:?} should be ERE");
        }
    }

    #[test]
    fn test_rejects_perl_extensions() {
        assert_eq!(violation(r"\d+"), (PosixViolation::PerlClass, 0));
        assert_eq!(violation(r"[a\s]"), (PosixViolation::PerlClass, 2));
        assert_eq!(violation(r"x\pL"), (PosixViolation::UnicodeClass, 1));
        assert_eq!(violation(r"[\p{Greek}]"), (PosixViolation::UnicodeClass, 1));
        assert_eq!(violation("ab*?"), (PosixViolation::NonGreedy, 2));
        assert_eq!(violation("(?i)abc"), (PosixViolation::Flags, 0));
        assert_eq!(violation("a(?i:b)"), (PosixViolation::Flags, 1));
        assert_eq!(violation("a(?:b)"), (PosixViolation::NonCapturingGroup, 1));
        assert_eq!(violation("(?P<x>a)"), (PosixViolation::NamedGroup, 0));
        assert_eq!(violation(r"\Aa"), (PosixViolation::PerlAssertion, 0));
        assert_eq!(violation(r"a\b"), (PosixViolation::PerlAssertion, 1));
    }

    fn excludes_newline(pattern: &str) -> bool {
        let mut ast = ast::parse::Parser::new().parse(pattern).unwrap();
        exclude_newline(&mut ast);
        let hir = regex_syntax::hir::translate::Translator::new()
            .translate(pattern, &ast)
            .unwrap();
        let re = regex_automata::meta::Regex::builder()
            .build_from_hir(&hir)
            .unwrap();
        !re.is_match("\n")
    }

    #[test]
    fn test_exclude_newline() {
        assert!(excludes_newline("[^b]"));
        assert!(excludes_newline("x|([^a-c]+)"));
        assert!(excludes_newline("[^[:alpha:]]+"));
        assert!(excludes_newline("[^a-c--b]"));

        assert!(!excludes_newline("[[:space:]]"));
        assert!(!excludes_newline("[a\n]"));
    }

    #[test]
    fn test_first_violation_wins() {
        assert_eq!(violation(r"(?:a)\d"), (PosixViolation::NonCapturingGroup, 0));
    }
}
