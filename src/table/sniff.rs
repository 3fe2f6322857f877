//! Delimiter resolution.
//!
//! Explicit formats win, then the file extension, then content sniffing.
//! Sniffing is a [`Sniffer`] strategy so the scoring heuristic can be swapped
//! without touching the renderer.

use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use thiserror::Error;

use super::{Delimiter, FormatSelector};
use crate::input::STDIN_MARKER;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SniffError {
    #[error("unknown format")]
    UnknownFormat,
}

/// Where a resolved delimiter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `--format tsv` or `--format csv`.
    Explicit,
    /// `.tsv` / `.csv` file extension.
    Extension,
    /// Content sniffing.
    Sniffed,
}

/// Picks a delimiter from fully buffered content.
pub trait Sniffer {
    fn sniff(&self, content: &[u8]) -> Result<Delimiter, SniffError>;
}

/// Scores each candidate by the total number of fields it produces over the
/// whole buffer and keeps the highest.
///
/// A wrong delimiter collapses each line into one wide field, so the right
/// one almost always yields more fields. Equal non-zero scores resolve to
/// [`Delimiter::Comma`]. Content yielding no fields at all, or that no
/// candidate can read, is rejected. Fields are counted as raw bytes, so the
/// text encoding of the content plays no part.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCountSniffer;

impl FieldCountSniffer {
    /// Total field count of `content` parsed with `delimiter`, or `None` when
    /// the parser reports an error.
    pub fn score(content: &[u8], delimiter: Delimiter) -> Option<u64> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(false)
            .flexible(true)
            .from_reader(content);

        let mut record = ByteRecord::new();
        let mut fields = 0u64;
        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => fields += record.len() as u64,
                Ok(false) => return Some(fields),
                Err(_) => return None,
            }
        }
    }
}

impl Sniffer for FieldCountSniffer {
    fn sniff(&self, content: &[u8]) -> Result<Delimiter, SniffError> {
        let mut best: Option<(Delimiter, u64)> = None;

        for delimiter in Delimiter::CANDIDATES {
            let Some(score) = Self::score(content, delimiter) else {
                continue;
            };
            if score == 0 {
                continue;
            }
            best = match best {
                Some((_, top)) if score > top => Some((delimiter, score)),
                Some((_, top)) if score == top => Some((Delimiter::Comma, score)),
                None => Some((delimiter, score)),
                keep => keep,
            };
        }

        best.map(|(delimiter, _)| delimiter)
            .ok_or(SniffError::UnknownFormat)
    }
}

/// Resolves the delimiter when no content is needed to do so.
///
/// Returns `None` when the caller must buffer the source and sniff it.
pub fn resolve_without_content(
    selector: FormatSelector,
    filename_hint: Option<&str>,
) -> Option<(Delimiter, Resolution)> {
    match selector {
        FormatSelector::Tsv => Some((Delimiter::Tab, Resolution::Explicit)),
        FormatSelector::Csv => Some((Delimiter::Comma, Resolution::Explicit)),
        FormatSelector::Auto => filename_hint
            .filter(|name| *name != STDIN_MARKER)
            .and_then(delimiter_from_extension)
            .map(|delimiter| (delimiter, Resolution::Extension)),
    }
}

/// Resolves the delimiter for a source, sniffing `content` only when the
/// selector and filename leave it open.
pub fn resolve(
    selector: FormatSelector,
    filename_hint: Option<&str>,
    content: &[u8],
    sniffer: &dyn Sniffer,
) -> Result<Delimiter, SniffError> {
    match resolve_without_content(selector, filename_hint) {
        Some((delimiter, _)) => Ok(delimiter),
        None => sniffer.sniff(content),
    }
}

fn delimiter_from_extension(name: &str) -> Option<Delimiter> {
    let ext = Path::new(name).extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("tsv") {
        Some(Delimiter::Tab)
    } else if ext.eq_ignore_ascii_case("csv") {
        Some(Delimiter::Comma)
    } else {
        None
    }
}
