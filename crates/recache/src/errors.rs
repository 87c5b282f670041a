//! # Error Types

/// A construct that is valid standard syntax but not POSIX ERE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[non_exhaustive]
pub enum PosixViolation {
    /// `\d`, `\s`, `\w` and their negations.
    #[strum(to_string = "Perl character class")]
    PerlClass,

    /// `\pL`, `\p{Greek}` and their negations.
    #[strum(to_string = "Unicode character class")]
    UnicodeClass,

    /// `*?`, `+?`, `??`, `{n,m}?`.
    #[strum(to_string = "non-greedy repetition")]
    NonGreedy,

    /// `(?i)` and `(?i:...)`.
    #[strum(to_string = "flag group")]
    Flags,

    /// `(?:...)`.
    #[strum(to_string = "non-capturing group")]
    NonCapturingGroup,

    /// `(?P<name>...)` and `(?<name>...)`.
    #[strum(to_string = "named capture group")]
    NamedGroup,

    /// `\A`, `\z`, `\b`, `\B` and the other word boundary assertions.
    #[strum(to_string = "Perl assertion")]
    PerlAssertion,
}

/// The single error kind of this crate: pattern text that cannot be compiled.
///
/// The wrapped collaborator errors are carried verbatim; `Display` is transparent
/// for them.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// The pattern could not be parsed (or translated) by `regex-syntax`.
    #[error(transparent)]
    Parse(Box<regex_syntax::Error>),

    /// The pattern parses, but uses a construct outside POSIX ERE.
    #[error("invalid POSIX ERE syntax: {violation} at offset {offset}")]
    Posix {
        /// What was rejected.
        violation: PosixViolation,

        /// Byte offset of the rejected construct in the pattern text.
        offset: usize,
    },

    /// The regex engine refused the pattern (e.g. it exceeds a size limit).
    #[error(transparent)]
    Build(Box<regex_automata::meta::BuildError>),
}

impl From<regex_syntax::Error> for SyntaxError {
    fn from(err: regex_syntax::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl From<regex_syntax::ast::Error> for SyntaxError {
    fn from(err: regex_syntax::ast::Error) -> Self {
        regex_syntax::Error::from(err).into()
    }
}

impl From<regex_syntax::hir::Error> for SyntaxError {
    fn from(err: regex_syntax::hir::Error) -> Self {
        regex_syntax::Error::from(err).into()
    }
}

impl From<regex_automata::meta::BuildError> for SyntaxError {
    fn from(err: regex_automata::meta::BuildError) -> Self {
        Self::Build(err.into())
    }
}

impl SyntaxError {
    /// Is this a POSIX ERE grammar rejection?
    pub fn is_posix(&self) -> bool {
        matches!(self, Self::Posix { .. })
    }

    /// Get the rejected POSIX construct, if any.
    pub fn posix_violation(&self) -> Option<PosixViolation> {
        match self {
            Self::Posix { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

/// Result type for compile operations.
pub type RecacheResult<T> = core::result::Result<T, SyntaxError>;
