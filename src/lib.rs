//! # tblclip - Tables to the Clipboard as HTML
//!
//! `tblclip` reads CSV or TSV data from files or stdin and puts an HTML
//! `<table>` on the clipboard, ready to paste into documents, mail and
//! spreadsheets that understand rich text.
//!
//! ## Quick Start
//!
//! ```bash
//! # Copy a file; the delimiter comes from the extension
//! tblclip ./report.csv
//!
//! # Copy from stdin; the delimiter is sniffed from the content
//! psql -At -F $'\t' -c 'select * from users' | tblclip
//!
//! # Several files in one table, printed instead of copied
//! tblclip --join --stdout a.tsv b.tsv
//! ```
//!
//! ## Delimiter resolution
//!
//! `--format tsv|csv` always wins. With `--format auto` (the default) a
//! `.tsv` or `.csv` extension decides; otherwise the whole input is buffered
//! and parsed with each candidate delimiter, and the one producing more
//! fields is used.

/// Clipboard sink backed by an external command.
pub mod clipboard;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Per-source conversion and table composition.
pub mod convert;

/// Input sources: files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// Delimiter sniffing and HTML row rendering.
pub mod table;

/// Terminal styling.
pub mod ui;
