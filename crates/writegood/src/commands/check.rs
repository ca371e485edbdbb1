//! Check command — run the configured checkers on a file and gate on the
//! result.
//!
//! Matches the file against configured `rules` in the config file to resolve
//! which checkers apply; with no rules configured, all three run with
//! default settings. Exits nonzero when anything is found.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use writegood_core::check::Category;
use writegood_core::config::{
    Config, DuplicatesRuleConfig, PassiveRuleConfig, WeaselRuleConfig,
};
use writegood_core::lint;
use writegood_core::rules::{ResolvedChecks, RuleSet};

use super::read_input_file;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to check.
    pub file: Utf8PathBuf,

    /// Checkers to run (comma-separated). Omit for the configured set.
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<Category>>,
}

/// Check a file and fail when style issues are found.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, only = ?args.only, "executing check command");

    let file_str = args.file.as_str();
    let mut resolved = match config.rules {
        Some(ref rules) => {
            let rule_set = RuleSet::compile(rules);
            let resolved = rule_set.resolve(file_str);
            if resolved.is_empty() && args.only.is_none() {
                debug!(file = %args.file, "no rules match this file");
                if !global_json {
                    println!("{} no rules match {}", "SKIP:".dimmed(), args.file);
                }
                return Ok(());
            }
            resolved
        }
        None => ResolvedChecks::all_default(),
    };

    if let Some(ref only) = args.only {
        if only.contains(&Category::Weasel) {
            resolved.weasel.get_or_insert_with(WeaselRuleConfig::default);
        } else {
            resolved.weasel = None;
        }
        if only.contains(&Category::Passive) {
            resolved
                .passive
                .get_or_insert_with(PassiveRuleConfig::default);
        } else {
            resolved.passive = None;
        }
        if only.contains(&Category::Duplicates) {
            resolved
                .duplicates
                .get_or_insert_with(DuplicatesRuleConfig::default);
        } else {
            resolved.duplicates = None;
        }
    }

    let content = read_input_file(&args.file, max_input_bytes)?;

    let report = lint::run_style_check(file_str, &content, &resolved, config)
        .with_context(|| format!("failed to check {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output
    println!("{}", args.file.bold());

    if let Some(ref w) = report.weasel {
        let status = status_label(w.count == 0);
        println!("  {} {} {} found", "weasel:".cyan(), status, w.count);
        for m in &w.matches {
            println!("    line {}: {}", m.line, m.text.yellow());
        }
    }

    if let Some(ref p) = report.passive {
        let status = status_label(p.count == 0);
        println!("  {} {} {} found", "passive:".cyan(), status, p.count);
        for m in &p.matches {
            println!("    line {}: {}", m.line, m.text.yellow());
        }
    }

    if let Some(ref d) = report.duplicates {
        let status = status_label(d.count == 0);
        println!("  {} {} {} found", "duplicates:".cyan(), status, d.count);
        for m in &d.matches {
            println!("    line {}: {}", m.line, m.word.yellow());
        }
    }

    if !report.pass {
        bail!("{} has {} style issues", args.file, report.total());
    }

    Ok(())
}

fn status_label(pass: bool) -> String {
    if pass {
        "PASS".green().to_string()
    } else {
        "FAIL".red().to_string()
    }
}
