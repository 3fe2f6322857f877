use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tblclip")]
#[command(about = "Copy CSV/TSV tables to the clipboard as HTML")]
#[command(version)]
pub struct Args {
    /// Files to convert (reads from stdin if none are given or for `-`)
    pub files: Vec<String>,

    /// Input table format: tsv, csv or auto
    #[arg(short = 'f', long, default_value = "auto")]
    pub format: String,

    /// Put the rows of all files into a single table
    #[arg(short = 'j', long)]
    pub join: bool,

    /// Write the HTML to stdout instead of the clipboard
    #[arg(short = 'o', long)]
    pub stdout: bool,

    /// Command that receives the HTML on its stdin
    #[arg(short = 'c', long = "clipboard-command", value_name = "CMD")]
    pub clipboard_command: Option<String>,

    /// Suppress status messages
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report how each file's delimiter was chosen
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
