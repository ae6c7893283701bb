//! CLI argument definitions for the commodity dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use komoditas_model::DatasetKind;

#[derive(Parser)]
#[command(
    name = "komoditas",
    version,
    about = "Commodity trade dashboard - browse quarantine trade records by office and commodity",
    long_about = "Browse the domestic-out, export, domestic-in, and import datasets.\n\n\
                  Pick an office (Satpel) and a commodity, then see where the goods \
                  came from or went, ranked by how often each value occurs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: $KOMODITAS_CONFIG, then ./komoditas.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the dataset files (overrides the config file).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the dataset kinds and where each is read from.
    Kinds,

    /// List the offices (Satpel) present in a dataset.
    Offices {
        /// Dataset kind: domestic-out, export, domestic-in, or import.
        #[arg(value_name = "KIND")]
        kind: DatasetKind,
    },

    /// List the commodities available under an office.
    Commodities {
        /// Dataset kind: domestic-out, export, domestic-in, or import.
        #[arg(value_name = "KIND")]
        kind: DatasetKind,

        /// Office to narrow by (ALL or SEMUA for every office).
        #[arg(long = "satpel", value_name = "OFFICE")]
        satpel: Option<String>,
    },

    /// Filter a dataset and show the frequency breakdowns.
    Search(SearchArgs),

    /// Load every dataset and report its status.
    Overview,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Dataset kind: domestic-out, export, domestic-in, or import.
    #[arg(value_name = "KIND")]
    pub kind: DatasetKind,

    /// Office to filter by (default: all offices).
    #[arg(long = "satpel", value_name = "OFFICE")]
    pub satpel: Option<String>,

    /// Commodity to filter by (default: all commodities).
    ///
    /// Matched exactly after normalization, except for domestic-out where
    /// any commodity containing the text matches.
    #[arg(long = "komoditas", value_name = "COMMODITY")]
    pub komoditas: Option<String>,

    /// Write the tab-delimited export report into this directory.
    #[arg(long = "export", value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
