use recache::SyntaxMode;

/// Syntax mode selection.
#[derive(clap::Args, Debug)]
pub struct SyntaxModeArgs {
    /// Use POSIX ERE syntax.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    posix: bool,
}

impl SyntaxModeArgs {
    /// Get the selected syntax mode.
    pub fn mode(&self) -> SyntaxMode {
        if self.posix {
            SyntaxMode::Posix
        } else {
            SyntaxMode::Standard
        }
    }
}
