use clap::Parser;

use tblclip::cli::Args;
use tblclip::cli::commands::convert::{self, ConvertOptions};
use tblclip::output::{self, OutputConfig};
use tblclip::ui::Style;

fn main() {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || defaults.no_color,
    });

    let options = ConvertOptions {
        files: args.files,
        format: args.format,
        join: args.join,
        stdout: args.stdout,
        clipboard_command: args.clipboard_command,
    };

    if let Err(err) = convert::run_convert(options) {
        tblclip::warn!("{} {err}", Style::error("error:"));
        output::flush_stderr();
        std::process::exit(convert::exit_code_for(&err));
    }
}
