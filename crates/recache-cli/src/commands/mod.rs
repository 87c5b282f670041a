use recache::PatternCaches;

mod check;
mod grep;

/// Subcommands for recache
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print input lines that match a pattern.
    Match(grep::MatchArgs),

    /// Compile patterns and report syntax errors.
    Check(check::CheckArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(
        &self,
        caches: &PatternCaches,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Match(cmd) => cmd.run(caches),
            Commands::Check(cmd) => cmd.run(caches),
        }
    }
}
