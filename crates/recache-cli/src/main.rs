mod commands;
mod input_output;
mod logging;
mod mode_args;

use clap::Parser;
use commands::Commands;
use recache::PatternCaches;

/// recache
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let caches = PatternCaches::new();
    args.command.run(&caches)
}
