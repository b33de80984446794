//! CLI argument definitions for the life-expectancy cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lifex",
    version,
    about = "Reshape and clean Eurostat life-expectancy tables",
    long_about = "Convert the wide Eurostat life-expectancy export into a long,\n\
                  type-clean CSV for a single region.\n\n\
                  Reads comma- or tab-separated input, unpivots the year columns,\n\
                  recovers annotated numeric cells, and keeps one region."
)]
pub struct Cli {
    /// Region code used to filter the cleaned observations.
    #[arg(long = "region", value_name = "CODE", default_value = "PT")]
    pub region: String,

    /// Path to the raw wide-format file (TSV or CSV).
    #[arg(
        long = "input",
        value_name = "PATH",
        default_value = "data/eu_life_expectancy_raw.tsv"
    )]
    pub input: PathBuf,

    /// Output path for the cleaned table.
    /// Defaults to data/<region>_life_expectancy.csv.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
