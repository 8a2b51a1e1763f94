use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::logger::Verbosity;
use crate::model::{
    DEFAULT_MAX_LINE_LEN, DEFAULT_SHIM, DEFAULT_SUFFIX, EmitOptions, LinePolicy,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// rc.d script to convert
    pub input: PathBuf,
    /// Output directory for the unit and its symlinks
    pub output: PathBuf,

    /// Suffix appended to service names to form unit names
    #[arg(long, env = "RCNG2UNIT_SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Program that runs the rc script for ExecStart/ExecStop
    #[arg(long, env = "RCNG2UNIT_SHIM", default_value = DEFAULT_SHIM)]
    pub shim: String,

    /// Longest header line (bytes) that is read in full
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_len: usize,

    /// Fail on lines longer than --max-line-len instead of truncating them
    #[arg(long)]
    pub reject_long_lines: bool,

    /// Print what was written to stdout
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Exit with status 3 if any symlink could not be created
    #[arg(long)]
    pub strict: bool,

    /// Log every symlink
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl Cli {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            suffix: self.suffix.clone(),
            shim: self.shim.clone(),
            max_line_len: self.max_line_len,
            line_policy: if self.reject_long_lines {
                LinePolicy::Reject
            } else {
                LinePolicy::Truncate
            },
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
