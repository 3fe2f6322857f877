//! Per-source conversion and table composition.
//!
//! Drives the sniffer and the renderer for each input in order, writing into
//! one shared sink. The sink is never closed here; the caller may still need
//! to write after the last source or hand the sink to a child process.

use std::io::{self, Write};

use thiserror::Error;

use crate::input::{Source, read_fully};
use crate::table::{
    Delimiter, FormatSelector, RenderError, Resolution, SniffError, Sniffer, render_rows,
    resolve_without_content,
};

/// Whether several sources share one `<table>` or get one each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    #[default]
    Separate,
    Joined,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open {name}: {source}")]
    Open { name: String, source: io::Error },

    #[error("failed to read {name}: {source}")]
    Buffer { name: String, source: io::Error },

    #[error("{name}: {source}")]
    Sniff { name: String, source: SniffError },

    #[error("{name}: {source}")]
    Render { name: String, source: RenderError },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl ConvertError {
    /// Returns `true` when the sink, not the source, failed.
    pub const fn is_write_error(&self) -> bool {
        matches!(
            self,
            Self::Write(_)
                | Self::Render {
                    source: RenderError::Write(_),
                    ..
                }
        )
    }
}

/// What happened to one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub name: String,
    pub delimiter: Delimiter,
    pub resolution: Resolution,
    pub rows: u64,
}

/// Converts one source into `<tr>` rows written to `sink`.
///
/// The whole source is buffered only when its delimiter has to be sniffed;
/// the same buffer then feeds the render pass.
pub fn convert_source<W: Write + ?Sized>(
    source: &Source,
    selector: FormatSelector,
    sink: &mut W,
    sniffer: &dyn Sniffer,
) -> Result<SourceSummary, ConvertError> {
    let name = source.to_string();
    let mut reader = source.open().map_err(|e| ConvertError::Open {
        name: name.clone(),
        source: e,
    })?;

    let (delimiter, resolution, rendered) =
        match resolve_without_content(selector, source.filename_hint()) {
            Some((delimiter, resolution)) => {
                let rendered = render_rows(reader, delimiter, sink);
                (delimiter, resolution, rendered)
            }
            None => {
                let content = read_fully(&mut reader).map_err(|e| ConvertError::Buffer {
                    name: name.clone(),
                    source: e,
                })?;
                drop(reader);

                let delimiter = sniffer
                    .sniff(&content)
                    .map_err(|e| ConvertError::Sniff {
                        name: name.clone(),
                        source: e,
                    })?;
                let rendered = render_rows(content.as_slice(), delimiter, sink);
                (delimiter, Resolution::Sniffed, rendered)
            }
        };

    let summary = rendered.map_err(|e| ConvertError::Render {
        name: name.clone(),
        source: e,
    })?;

    Ok(SourceSummary {
        name,
        delimiter,
        resolution,
        rows: summary.rows,
    })
}

/// Converts every source in order, wrapping rows according to `layout`.
///
/// Stops at the first failing source; output already written stays in the
/// sink.
pub fn convert_all<W: Write + ?Sized>(
    sources: &[Source],
    selector: FormatSelector,
    layout: TableLayout,
    sink: &mut W,
    sniffer: &dyn Sniffer,
) -> Result<Vec<SourceSummary>, ConvertError> {
    let mut summaries = Vec::with_capacity(sources.len());

    if layout == TableLayout::Joined {
        sink.write_all(b"<table>")?;
    }

    for source in sources {
        if layout == TableLayout::Separate {
            sink.write_all(b"<table>")?;
        }
        summaries.push(convert_source(source, selector, sink, sniffer)?);
        if layout == TableLayout::Separate {
            sink.write_all(b"</table>")?;
        }
    }

    if layout == TableLayout::Joined {
        sink.write_all(b"</table>")?;
    }

    Ok(summaries)
}
