use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where a command reads lines from, or writes results to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stream {
    /// stdin or stdout.
    Standard,

    /// A named file.
    File(PathBuf),
}

impl Stream {
    /// Resolve an optional path argument; absent or `-` selects the standard stream.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Stream::File(p.to_path_buf()),
            _ => Stream::Standard,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Stream::Standard => f.write_str("-"),
            Stream::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file to search; "-" or absent reads stdin.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// The selected input stream.
    pub fn source(&self) -> Stream {
        Stream::from_arg(self.input.as_deref())
    }

    /// Open a buffered reader over the input.
    pub fn open_reader(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match self.source() {
            Stream::Standard => Box::new(BufReader::new(io::stdin().lock())),
            Stream::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file for results; "-" or absent writes stdout.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// The selected output stream.
    pub fn sink(&self) -> Stream {
        Stream::from_arg(self.output.as_deref())
    }

    /// Open a buffered writer over the output.
    pub fn open_writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match self.sink() {
            Stream::Standard => Box::new(BufWriter::new(io::stdout().lock())),
            Stream::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}
