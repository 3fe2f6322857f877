use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Argument value that stands for standard input.
pub const STDIN_MARKER: &str = "-";

/// A single input to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// Maps a command-line argument to a source; `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Builds the source list for the given arguments, defaulting to stdin.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Vec<Self> {
        if args.is_empty() {
            return vec![Self::Stdin];
        }
        args.iter().map(|arg| Self::from_arg(arg.as_ref())).collect()
    }

    /// Name used for extension sniffing. Stdin reports the `-` marker.
    pub fn filename_hint(&self) -> Option<&str> {
        match self {
            Self::Stdin => Some(STDIN_MARKER),
            Self::Path(path) => path.to_str(),
        }
    }

    /// Opens the source for reading. The handle is closed when dropped.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::Path(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads everything from `reader` into memory.
pub fn read_fully<R: Read + ?Sized>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}
