#![allow(missing_docs)]

//! The process-wide entry points, as a drop-in for direct compile / match calls.

use recache::{PosixViolation, SyntaxError, SyntaxMode};

#[test]
fn test_compile() {
    let mut re = recache::compile("^[hc]at").unwrap();
    assert_eq!(re.mode(), SyntaxMode::Standard);
    assert!(re.is_match_str("cat"));
    assert!(re.is_match_str("hat"));
    assert!(!re.is_match_str("hot"));

    assert!(recache::global().standard().contains("^[hc]at"));
}

#[test]
fn test_compile_posix() {
    let mut re = recache::compile_posix("^(foo|bar)+$").unwrap();
    assert_eq!(re.mode(), SyntaxMode::Posix);
    assert!(re.is_match_str("zzz\nfoobar\nzzz"));

    let err = recache::compile_posix(r"^^^[ddd]!!\1\1\1\1").unwrap_err();
    assert!(matches!(err, SyntaxError::Parse(_)));

    let err = recache::compile_posix(r"[[:alpha:]]+?").unwrap_err();
    assert_eq!(err.posix_violation(), Some(PosixViolation::NonGreedy));
}

#[test]
fn test_invalid_pattern_errors_every_time() {
    for _ in 0..4 {
        let err = recache::compile("x{2").unwrap_err();
        assert!(matches!(err, SyntaxError::Parse(_)));
    }
    assert!(!recache::global().standard().contains("x{2"));
}

#[test]
fn test_match_family() {
    assert!(recache::is_match(r"\x00\x01", b"\t\x00\x01\t").unwrap());
    assert!(!recache::is_match(r"\x00\x02", b"\t\x00\x01\t").unwrap());

    assert!(recache::is_match_str(r"(?i)hello", "Say HELLO").unwrap());
    assert!(!recache::is_match_str(r"^hello", "say hello").unwrap());

    let reader = "line one\nline two".chars();
    assert!(recache::is_match_reader(r"two$", reader).unwrap());

    let err = recache::is_match_reader("[", "abc".chars()).unwrap_err();
    assert!(err.to_string().contains("unclosed character class"));
}

#[test]
fn test_handles_are_owned_copies() {
    let mut a = recache::must_compile(r"[a-z]+");
    let mut b = recache::must_compile(r"[a-z]+");

    let mut it = a.find_iter("ab cd");
    assert_eq!(it.next(), Some(0..2));
    assert_eq!(b.find("ab cd"), Some(0..2));
    assert_eq!(it.next(), Some(3..5));
    assert_eq!(it.next(), None);
}

#[test]
#[should_panic(expected = "recache: Compile(`^^^[ddd]!!\\1\\1\\1\\1`): regex parse error")]
fn test_must_compile_panics() {
    recache::must_compile(r"^^^[ddd]!!\1\1\1\1");
}

#[test]
#[should_panic(expected = "recache: CompilePOSIX(`\\d`): invalid POSIX ERE syntax: Perl character class")]
fn test_must_compile_posix_panics() {
    recache::must_compile_posix(r"\d");
}

#[test]
#[should_panic(expected = "recache: Compile(\"a\\nb(\"): regex parse error")]
fn test_must_compile_panics_with_escaped_quote() {
    recache::must_compile("a\nb(");
}
