//! CLI argument definitions for the HubSpot → Reevo converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hubspot-reevo",
    version,
    about = "Convert HubSpot contact exports into Reevo import files",
    long_about = "Convert HubSpot contact exports into Reevo import files.\n\n\
                  Maps fields to the Reevo template, cleans domains and phone numbers,\n\
                  validates import readiness and writes the valid records as CSV."
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

    /// Include contact values (names, emails, phones) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an export into a Reevo import file.
    Import(ImportArgs),

    /// Profile the raw data quality of an export without converting it.
    Profile(ProfileArgs),

    /// Show the field mapping and phone priority.
    Mapping,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// HubSpot contact export (CSV).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Owner id stamped on every contact.
    #[arg(long = "contact-owner", value_name = "ID")]
    pub contact_owner: Option<String>,

    /// Owner id stamped on every account.
    #[arg(long = "account-owner", value_name = "ID")]
    pub account_owner: Option<String>,

    /// Output directory (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with owner ids and output directory.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write a JSON run report next to the import file.
    #[arg(long = "report")]
    pub report: bool,

    /// Transform and validate without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// HubSpot contact export (CSV).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
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
