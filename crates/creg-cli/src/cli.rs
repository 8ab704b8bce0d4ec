//! CLI argument definitions for the registry packer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "creg-pack",
    version,
    about = "Pack a carbon registry project export into fixed-layout binary records",
    long_about = "Convert a delimited registry project export into a fixed-layout binary \
                  record file.\n\n\
                  Text fields are padded to the widest value seen per column, records are \
                  ordered by credits issued, and each record is the padded text fields \
                  followed by four big-endian 32-bit integers."
)]
pub struct Cli {
    /// Path to the registry project export (header line + one project per line).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: the input file name with a `.bin` extension).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter character.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Decode the written file again and check record count and ordering.
    #[arg(long = "verify")]
    pub verify: bool,

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
