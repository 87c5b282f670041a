use std::io::Write;

use recache::{PatternCache, PatternCaches, quote};

use crate::{input_output::OutputArgs, logging::LogArgs, mode_args::SyntaxModeArgs};

/// Args for the check command.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Patterns to compile.
    #[arg(required = true)]
    patterns: Vec<String>,

    #[command(flatten)]
    mode: SyntaxModeArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl CheckArgs {
    /// Run the check command.
    pub fn run(
        &self,
        caches: &PatternCaches,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let cache = caches.cache(self.mode.mode());
        let mut writer = self.output.open_writer()?;

        let failed = check_patterns(cache, &self.patterns, &mut writer)?;
        log::debug!("{:?}", cache.stats());

        if failed > 0 {
            return Err(format!(
                "{failed} of {} patterns failed to compile ({})",
                self.patterns.len(),
                cache.mode()
            )
            .into());
        }
        Ok(())
    }
}

/// Compile each pattern through `cache`, reporting one result per pattern.
///
/// ## Returns
/// The number of patterns that failed to compile.
fn check_patterns(
    cache: &PatternCache,
    patterns: &[String],
    writer: &mut dyn Write,
) -> std::io::Result<usize> {
    let mut failed = 0;
    for pattern in patterns {
        match cache.get(pattern) {
            Ok(_) => writeln!(writer, "ok\t{}", quote(pattern))?,
            Err(err) => {
                failed += 1;
                writeln!(writer, "error\t{}\n{}", quote(pattern), err)?;
            }
        }
    }
    writer.flush()?;
    Ok(failed)
}
