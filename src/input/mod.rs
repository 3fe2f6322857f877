//! Input sources: named files or standard input.

mod reader;

pub use reader::{STDIN_MARKER, Source, read_fully};
