//! Duplicates command — report adjacent duplicate words.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use writegood_core::check::{DuplicateChecker, DuplicateReport};
use writegood_core::config::Config;

use super::{RangeArgs, read_input_file};

/// Arguments for the `duplicates` subcommand.
#[derive(Args, Debug)]
pub struct DuplicatesArgs {
    /// File to scan.
    pub file: Utf8PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Let duplicate pairs span punctuation (historical loose matching)
    #[arg(long)]
    pub span_punctuation: bool,
}

/// Report every adjacent duplicate word in a file.
///
/// The text report ends with an explicit scan-complete notice, present even
/// when nothing was found.
#[instrument(name = "cmd_duplicates", skip_all, fields(file = %args.file))]
pub fn cmd_duplicates(
    args: DuplicatesArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, start = ?args.range.start, end = ?args.range.end, "executing duplicates command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let span_punctuation = args.span_punctuation || config.duplicates_span_punctuation;
    let checker =
        DuplicateChecker::new(span_punctuation).context("failed to compile duplicate pattern")?;
    let matches = checker.scan(&content, args.range.start, args.range.end);
    let report = DuplicateReport {
        count: matches.len(),
        matches,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for m in &report.matches {
        println!("{}:{}: duplicate {}", args.file, m.line, m.word.magenta());
    }
    println!(
        "{}: duplicate scan complete ({} found)",
        args.file, report.count
    );

    Ok(())
}
