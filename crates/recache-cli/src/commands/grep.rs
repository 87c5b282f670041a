use std::io::{BufRead, Write};

use recache::{Matcher, PatternCaches};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    mode_args::SyntaxModeArgs,
};

/// Args for the match command.
#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    /// The pattern to match.
    pattern: String,

    #[command(flatten)]
    mode: SyntaxModeArgs,

    /// Select lines that do not match.
    #[arg(long)]
    invert: bool,

    /// Print only the number of selected lines.
    #[arg(short, long)]
    count: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl MatchArgs {
    /// Run the match command.
    pub fn run(
        &self,
        caches: &PatternCaches,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut matcher = caches.cache(self.mode.mode()).get(&self.pattern)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let selected = select_lines(
            &mut matcher,
            &mut reader,
            &mut writer,
            self.invert,
            self.count,
        )?;
        log::info!(
            "{selected} lines of {} selected by {}",
            self.input.source(),
            recache::quote(&self.pattern)
        );

        Ok(())
    }
}

/// Copy the selected lines of `reader` to `writer`.
///
/// Lines are matched as bytes, without their terminator; input need not be UTF-8.
///
/// ## Returns
/// The number of selected lines.
fn select_lines(
    matcher: &mut Matcher,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    invert: bool,
    count_only: bool,
) -> std::io::Result<usize> {
    let mut selected = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if matcher.is_match(line) != invert {
            selected += 1;
            if !count_only {
                writer.write_all(line)?;
                writer.write_all(b"\n")?;
            }
        }
    }

    if count_only {
        writeln!(writer, "{selected}")?;
    }
    writer.flush()?;

    Ok(selected)
}
