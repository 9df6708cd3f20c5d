use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Maya calendar converter.
#[derive(Parser)]
#[command(
    name = "maya",
    version,
    about = "Convert Gregorian dates to the Maya Long Count, Haab', Tzolk'in and Lord of the Night"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a single date.
    Convert(ConvertArgs),
    /// Answer one JSON request envelope (function-call mode).
    Invoke(InvokeArgs),
    /// Convert a file of dates, one `D/M/Y` per line.
    Batch(BatchArgs),
}

/// Overrides for the `[calendar]` config section, shared by all subcommands.
#[derive(clap::Args, Default)]
pub struct CalendarArgs {
    /// Correlation constant: `gmt`, `lounsbury`, or an epoch JDN.
    #[arg(long)]
    pub correlation: Option<String>,

    /// Reject impossible months and days instead of passing them through.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Day of the month.
    #[arg(short, long)]
    pub day: Option<String>,

    /// Month of the year (1-12).
    #[arg(short, long)]
    pub month: Option<String>,

    /// Astronomical year (-4800..=4000; 1 BCE is 0).
    #[arg(short, long, allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Output format: `text` or `json`. Overrides `[output].format`.
    #[arg(short, long)]
    pub format: Option<String>,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

/// Arguments for the `invoke` subcommand.
#[derive(clap::Args)]
pub struct InvokeArgs {
    /// Path to the JSON request. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Path to the input file of `D/M/Y` dates.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output. Writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: `text` or `json`. Overrides `[output].format`.
    #[arg(short, long)]
    pub format: Option<String>,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}
