use std::io::{self, Read, Write};

use csv::{ByteRecord, ReaderBuilder};
use thiserror::Error;

use super::Delimiter;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read record: {0}")]
    Read(#[from] csv::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Counts reported once a source has been rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub rows: u64,
    pub fields: u64,
}

/// Streams every record of `reader` to `sink` as a `<tr>` row.
///
/// Each row is written as soon as its record is parsed; only one record is
/// held in memory at a time. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD, so the output is always UTF-8. The surrounding `<table>`
/// element is left to the caller so several sources can share one table.
///
/// # Errors
///
/// Stops at the first read or write error. Rows already written stay in the
/// sink.
pub fn render_rows<R, W>(
    reader: R,
    delimiter: Delimiter,
    sink: &mut W,
) -> Result<RenderSummary, RenderError>
where
    R: Read,
    W: Write + ?Sized,
{
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut record = ByteRecord::new();
    let mut row = String::new();
    let mut summary = RenderSummary::default();

    while reader.read_byte_record(&mut record)? {
        row.clear();
        row.push_str("<tr>");
        for field in &record {
            row.push_str("<td>");
            let text = String::from_utf8_lossy(field);
            escape_html(&text, &mut row);
            row.push_str("</td>");
        }
        row.push_str("</tr>");

        sink.write_all(row.as_bytes())?;
        summary.rows += 1;
        summary.fields += record.len() as u64;
    }

    Ok(summary)
}

/// Appends `text` to `out` with HTML special characters replaced by entities.
pub fn escape_html(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
