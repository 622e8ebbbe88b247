//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `chatgrep`
//! binary, and [`ReportFormat`], the clap-facing mirror of
//! [`OutputFormat`](crate::format::OutputFormat).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::format::OutputFormat;

/// Search a ZIP of chat exports for messages by author.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatgrep")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatgrep export.zip --author alice
    chatgrep export.zip -a Alice -i
    chatgrep export.zip -a bob -f json -o bob.json
    chatgrep export.zip --pattern '\"from\": \"(?P<author>.*?)\",.*?\"body\": \"(?P<text>.*?)\"'")]
pub struct Args {
    /// Path to the ZIP archive
    pub archive: PathBuf,

    /// Author substring to search for (empty matches everyone)
    #[arg(short, long, default_value_t = String::new(), value_name = "AUTHOR")]
    pub author: String,

    /// Output format (default: from the --output extension, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Match authors case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Custom extraction regex with `author` and `text` named groups
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Directory to create the scratch directory in
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Print search statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Builds the search configuration from the flags.
    pub fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::new().with_ignore_case(self.ignore_case);
        if let Some(ref pattern) = self.pattern {
            config = config.with_pattern(pattern.clone());
        }
        if let Some(ref dir) = self.scratch_dir {
            config = config.with_scratch_root(dir.clone());
        }
        config
    }

    /// Resolves the output format.
    ///
    /// An explicit `--format` wins. Otherwise the extension of `--output`
    /// decides, and stdout gets the text report.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format.into()),
            (None, Some(path)) => OutputFormat::from_path(path),
            (None, None) => Ok(OutputFormat::Text),
        }
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportFormat {
    /// Grouped plain-text report
    #[value(alias = "txt")]
    Text,

    /// JSON array of per-file blocks
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> OutputFormat {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Csv => OutputFormat::Csv,
        }
    }
}
