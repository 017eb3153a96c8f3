//! CLI argument definitions for `hx`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hx_model::HeadingLevel;

#[derive(Parser)]
#[command(
    name = "hx",
    version,
    about = "Extract the heading outline of a PDF",
    long_about = "Upload a PDF to the heading-extraction service and work with the \
                  returned outline.\n\n\
                  Filter by text or level, show per-level statistics, export JSON or \
                  indented text, or copy the outline to the clipboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the extraction service (overrides HX_API_URL and settings.toml).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract headings from a PDF and print the outline.
    Extract(ExtractArgs),

    /// Check that the extraction service is reachable and healthy.
    Health,

    /// Show the effective configuration.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// PDF to upload.
    #[arg(value_name = "PDF")]
    pub pdf: PathBuf,

    /// Only show headings containing this text (case-insensitive).
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Only show these levels. Repeat for several (default: all).
    #[arg(long = "level", short = 'l', value_name = "LEVEL")]
    pub levels: Vec<HeadingLevel>,

    /// Print per-level statistics.
    #[arg(long = "stats")]
    pub stats: bool,

    /// Save the full result as `<name>_headings.json` in this directory.
    #[arg(long = "json-out", value_name = "DIR")]
    pub json_out: Option<PathBuf>,

    /// Save the full outline as `<name>_outline.txt` in this directory.
    #[arg(long = "text-out", value_name = "DIR")]
    pub text_out: Option<PathBuf>,

    /// Copy the full outline to the clipboard.
    #[arg(long = "copy")]
    pub copy: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Store this service URL in settings.toml.
    #[arg(long = "set-api-url", value_name = "URL")]
    pub set_api_url: Option<String>,
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
