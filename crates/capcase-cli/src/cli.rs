//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use capcase_model::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[command(
    name = "capcase",
    version,
    about = "Clean a capital punishment case dataset",
    long_about = "Load a capital punishment case CSV, keep the analysis columns, \
                  fix known label defects and expand two-digit execution years.\n\n\
                  Prints a diagnostics report before and after normalization."
)]
pub struct Cli {
    /// Source CSV file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Destination of the cleaned CSV file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Format of the diagnostics reports printed to stdout.
    #[arg(long = "report-format", value_enum, default_value = "text")]
    pub report_format: ReportFormatArg,

    /// Run every stage but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_fixed_file_names() {
        let cli = Cli::parse_from(["capcase"]);
        assert_eq!(cli.input, PathBuf::from("original_data.csv"));
        assert_eq!(cli.output, PathBuf::from("preprocessed_data.csv"));
        assert!(!cli.dry_run);
        assert!(matches!(cli.report_format, ReportFormatArg::Text));
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "capcase",
            "--input",
            "raw.csv",
            "--output",
            "clean.csv",
            "--report-format",
            "json",
            "--dry-run",
        ]);
        assert_eq!(cli.input, PathBuf::from("raw.csv"));
        assert_eq!(cli.output, PathBuf::from("clean.csv"));
        assert!(cli.dry_run);
        assert!(matches!(cli.report_format, ReportFormatArg::Json));
    }
}
