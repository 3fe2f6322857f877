use anyhow::Result;
use std::io::{self, Write};

use crate::clipboard::{self, ClipboardError, ClipboardSink};
use crate::convert::{ConvertError, SourceSummary, TableLayout, convert_all};
use crate::input::Source;
use crate::table::{FieldCountSniffer, FormatError, FormatSelector, Resolution};
use crate::ui::Style;
use crate::{detail, status};

pub struct ConvertOptions {
    pub files: Vec<String>,
    pub format: String,
    pub join: bool,
    pub stdout: bool,
    pub clipboard_command: Option<String>,
}

pub fn run_convert(options: ConvertOptions) -> Result<()> {
    let selector: FormatSelector = options.format.parse()?;
    let sources = Source::from_args(&options.files);
    let layout = if options.join {
        TableLayout::Joined
    } else {
        TableLayout::Separate
    };

    let summaries = if options.stdout {
        let mut stdout = io::stdout().lock();
        let summaries = convert_all(&sources, selector, layout, &mut stdout, &FieldCountSniffer)?;
        writeln!(stdout)?;
        stdout.flush()?;
        summaries
    } else {
        let command = options
            .clipboard_command
            .as_deref()
            .or(clipboard::default_command())
            .ok_or(ClipboardError::Unavailable)?;

        let mut sink = ClipboardSink::spawn(command)?;
        match convert_all(&sources, selector, layout, &mut sink, &FieldCountSniffer) {
            Ok(summaries) => {
                sink.finish()?;
                summaries
            }
            Err(err) if err.is_write_error() => {
                // A closed pipe means the command exited early; its status is the real cause.
                sink.finish()?;
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        }
    };

    report(&summaries, options.stdout);
    Ok(())
}

fn report(summaries: &[SourceSummary], to_stdout: bool) {
    for summary in summaries {
        let how = match summary.resolution {
            Resolution::Explicit => "from --format",
            Resolution::Extension => "from extension",
            Resolution::Sniffed => "sniffed",
        };
        detail!(
            "{}: {} {} ({} rows)",
            Style::label(&summary.name),
            Style::value(summary.delimiter),
            Style::secondary(how),
            summary.rows
        );
    }

    if to_stdout {
        return;
    }

    let rows: u64 = summaries.iter().map(|s| s.rows).sum();
    status!(
        "{}",
        Style::success(format!(
            "Copied {rows} rows from {} source(s) to the clipboard",
            summaries.len()
        ))
    );
}

/// Maps an error from [`run_convert`] onto a process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<FormatError>().is_some() {
        return exitcode::CONFIG;
    }

    if let Some(err) = err.downcast_ref::<ConvertError>() {
        return match err {
            ConvertError::Open { .. } => exitcode::NOINPUT,
            ConvertError::Sniff { .. } => exitcode::DATAERR,
            ConvertError::Buffer { .. } | ConvertError::Render { .. } | ConvertError::Write(_) => {
                exitcode::IOERR
            }
        };
    }

    if let Some(err) = err.downcast_ref::<ClipboardError>() {
        return match err {
            ClipboardError::Unavailable | ClipboardError::Spawn(..) => exitcode::UNAVAILABLE,
            ClipboardError::Failed(..) => exitcode::SOFTWARE,
            ClipboardError::Io(_) => exitcode::IOERR,
        };
    }

    exitcode::IOERR
}
