//! Weasel command — report vague or hedging words.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use writegood_core::check::{WeaselChecker, WeaselReport};
use writegood_core::config::Config;

use super::{RangeArgs, read_input_file};

/// Arguments for the `weasel` subcommand.
#[derive(Args, Debug)]
pub struct WeaselArgs {
    /// File to scan.
    pub file: Utf8PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Report every weasel-word occurrence in a file.
#[instrument(name = "cmd_weasel", skip_all, fields(file = %args.file))]
pub fn cmd_weasel(
    args: WeaselArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, start = ?args.range.start, end = ?args.range.end, "executing weasel command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let checker = WeaselChecker::new(&config.weasel_words(), config.case_insensitive)
        .context("failed to compile weasel-word pattern")?;
    let matches = checker.check_range(&content, args.range.start, args.range.end);
    let report = WeaselReport {
        count: matches.len(),
        matches,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for m in &report.matches {
        println!("{}:{}: {}", args.file, m.line, m.text.yellow());
    }
    if report.count == 0 {
        println!("{}: no weasel words found", args.file);
    } else {
        println!(
            "{}: {} weasel {}",
            args.file,
            report.count,
            if report.count == 1 { "word" } else { "words" }
        );
    }

    Ok(())
}
