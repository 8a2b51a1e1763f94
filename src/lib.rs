pub mod cli;
pub mod error;
pub mod logger;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::cli::ReportFormat;
use crate::error::ConvertError;
use crate::model::{EmitOptions, EmitReport, ServiceDescriptor};

/// Exit status when `--strict` is given and a symlink could not be made.
pub const EXIT_LINK_WARNINGS: u8 = 3;

/// Convert the rc.d script at `input` into a unit plus symlinks in `out_dir`.
///
/// The service name is the script's file name. `out_dir` must exist; a
/// relative one is made absolute so the symlinks point at the unit file.
pub fn convert(input: &Path, out_dir: &Path, opts: &EmitOptions) -> error::Result<EmitReport> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ConvertError::InputOpen {
            path: input.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })?;

    let rcscript = File::open(input).map_err(|source| ConvertError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;

    info!("Converting RC script {}", name);

    // 1. ── Parse ──────────────────────────────────────────────────────
    let mut svc = ServiceDescriptor::new(name, input.to_string_lossy());
    parser::parse_rcscript(
        BufReader::new(rcscript),
        &mut svc,
        opts.max_line_len,
        opts.line_policy,
    )?;

    // 2. ── Process ────────────────────────────────────────────────────
    let out_dir = std::path::absolute(out_dir).map_err(|source| ConvertError::OutputOpen {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let processed = processor::run(&svc, &out_dir, opts);

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::emit(&processed)
}

pub fn run() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();
    logger::init(args.verbosity());
    run_with(args, &mut io::stdout().lock())
}

/// Driver body: convert, print the report to `stdout`, pick the exit code.
pub fn run_with<W: Write>(args: cli::Cli, stdout: &mut W) -> anyhow::Result<ExitCode> {
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;

    let report = convert(&args.input, &args.output, &args.emit_options())
        .with_context(|| format!("Failed to convert RC script {}", args.input.display()))?;

    match args.report {
        Some(ReportFormat::Text) => write!(stdout, "{report}")?,
        Some(ReportFormat::Json) => writeln!(
            stdout,
            "{}",
            serde_json::to_string_pretty(&report).context("Serialising report")?
        )?,
        None => {}
    }

    if args.strict && report.has_warnings() {
        return Ok(ExitCode::from(EXIT_LINK_WARNINGS));
    }
    Ok(ExitCode::SUCCESS)
}
