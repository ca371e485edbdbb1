//! Passive command — report passive-voice constructions.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use writegood_core::check::{PassiveChecker, PassiveReport};
use writegood_core::config::Config;

use super::{RangeArgs, read_input_file};

/// Arguments for the `passive` subcommand.
#[derive(Args, Debug)]
pub struct PassiveArgs {
    /// File to scan.
    pub file: Utf8PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Report every passive-voice construction in a file.
#[instrument(name = "cmd_passive", skip_all, fields(file = %args.file))]
pub fn cmd_passive(
    args: PassiveArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, start = ?args.range.start, end = ?args.range.end, "executing passive command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let checker = PassiveChecker::new(
        &config.passive_verbs(),
        &config.passive_participles(),
        config.case_insensitive,
    )
    .context("failed to compile passive-voice pattern")?;
    let matches = checker.check_range(&content, args.range.start, args.range.end);
    let report = PassiveReport {
        count: matches.len(),
        matches,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for m in &report.matches {
        println!("{}:{}: {}", args.file, m.line, m.text.cyan());
    }
    if report.count == 0 {
        println!("{}: no passive voice found", args.file);
    } else {
        println!(
            "{}: {} passive {}",
            args.file,
            report.count,
            if report.count == 1 {
                "construction"
            } else {
                "constructions"
            }
        );
    }

    Ok(())
}
