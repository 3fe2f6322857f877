//! Delimiter resolution and HTML table rendering.
//!
//! The two halves are independent: [`sniff`] decides which delimiter a source
//! uses, [`render`] turns a byte stream into `<tr>` fragments once the
//! delimiter is known.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod render;
mod sniff;

pub use render::{RenderError, RenderSummary, escape_html, render_rows};
pub use sniff::{
    FieldCountSniffer, Resolution, SniffError, Sniffer, resolve, resolve_without_content,
};

/// Field separator of a delimited source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    /// Every delimiter the sniffer considers, in scoring order.
    pub const CANDIDATES: [Self; 2] = [Self::Tab, Self::Comma];

    /// Returns the byte handed to the CSV parser.
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => f.write_str("tab"),
            Self::Comma => f.write_str("comma"),
        }
    }
}

/// How the delimiter of a source should be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatSelector {
    Tsv,
    Csv,
    #[default]
    Auto,
}

/// Raised for a format name other than `tsv`, `csv` or `auto`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported format: {0} (expected tsv, csv or auto)")]
    Unsupported(String),
}

impl FromStr for FormatSelector {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "csv" => Ok(Self::Csv),
            "auto" => Ok(Self::Auto),
            _ => Err(FormatError::Unsupported(s.to_string())),
        }
    }
}
