//! # Syntax Modes

/// The grammar variant a pattern is compiled under.
///
/// The same pattern text can compile to different matchers (or fail) under
/// each mode; caches are partitioned by mode and never share entries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[non_exhaustive]
pub enum SyntaxMode {
    /// The default (Perl-flavored, RE2-family) syntax.
    #[default]
    #[strum(to_string = "standard")]
    Standard,

    /// POSIX extended regular expression syntax.
    #[strum(to_string = "posix", serialize = "posix-ere")]
    Posix,
}

impl SyntaxMode {
    /// Is this [`SyntaxMode::Posix`]?
    pub fn is_posix(&self) -> bool {
        matches!(self, Self::Posix)
    }

    /// The facade entry point name for this mode.
    ///
    /// Used in must-compile panic messages.
    pub fn compile_fn_name(&self) -> &'static str {
        match self {
            Self::Standard => "Compile",
            Self::Posix => "CompilePOSIX",
        }
    }
}
