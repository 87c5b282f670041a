use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v error, -vv warn, -vvv info, -vvvv debug, more for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[clap(long)]
    pub ts: bool,
}

/// The verbosity in effect: the `-v` count if given, else the command's default.
fn effective_verbosity(
    verbose: u8,
    default: u8,
) -> u8 {
    if verbose > 0 { verbose } else { default }
}

fn level_for(verbosity: u8) -> LogLevelNum {
    match verbosity {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// `default` is the verbosity used when no `-v` flags are given.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Millisecond
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level_for(effective_verbosity(self.verbose, default)))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
