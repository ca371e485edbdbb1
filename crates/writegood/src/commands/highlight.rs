//! Highlight command — render a file with style issues flagged inline.
//!
//! A terminal stand-in for live-highlight mode: the three annotation rules
//! are registered through the same [`LiveHighlight`] coordinator an editor
//! integration would use, and the terminal plays the rendering layer,
//! painting each registered rule's matches in its configured style.

use std::ops::Range;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{AnsiColors, OwoColorize, Style};
use serde::Serialize;
use tracing::{debug, instrument};

use writegood_core::check::Category;
use writegood_core::config::Config;
use writegood_core::highlight::{
    AnnotationRule, AnnotationSink, LiveHighlight, RuleHandle, build_rules,
};

use super::read_input_file;

/// Arguments for the `highlight` subcommand.
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// File to render.
    pub file: Utf8PathBuf,

    /// Register the rules through global mode (applies to every announced
    /// buffer) instead of enabling this buffer directly
    #[arg(long)]
    pub global: bool,
}

/// A highlighted span, for JSON output.
#[derive(Serialize)]
struct HighlightSpan {
    category: Category,
    start: usize,
    end: usize,
    tooltip: String,
}

/// Terminal rendering layer: records registered rules by handle.
#[derive(Default)]
struct TerminalSink {
    next: u64,
    rules: Vec<(RuleHandle, AnnotationRule)>,
}

impl AnnotationSink for TerminalSink {
    fn add_rule(&mut self, rule: &AnnotationRule) -> RuleHandle {
        let handle = RuleHandle(self.next);
        self.next += 1;
        self.rules.push((handle, rule.clone()));
        handle
    }

    fn remove_rule(&mut self, handle: RuleHandle) -> bool {
        let before = self.rules.len();
        self.rules.retain(|(h, _)| *h != handle);
        self.rules.len() != before
    }
}

/// Render a file with inline highlighting.
#[instrument(name = "cmd_highlight", skip_all, fields(file = %args.file))]
pub fn cmd_highlight(
    args: HighlightArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, global = args.global, "executing highlight command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let rules = build_rules(config).context("failed to build annotation rules")?;
    let mut live: LiveHighlight<String> = LiveHighlight::new(rules);
    let mut sink = TerminalSink::default();

    let buffer = args.file.to_string();
    if args.global || config.global_highlight {
        live.set_global(true);
        live.on_buffer_created(buffer, &mut sink);
    } else {
        live.enable(buffer, &mut sink);
    }

    let mut spans = collect_spans(&content, &sink)?;
    spans.sort_by_key(|(range, _)| (range.start, range.end));
    let spans = drop_overlaps(spans);

    if global_json {
        let json_spans: Vec<HighlightSpan> = spans
            .iter()
            .map(|(range, rule)| HighlightSpan {
                category: rule.category,
                start: range.start,
                end: range.end,
                tooltip: rule.tooltip.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_spans)?);
        return Ok(());
    }

    render(&content, &spans);

    // Legend: which style means what
    println!();
    for (_, rule) in &sink.rules {
        let style = terminal_style(rule);
        println!("  {} {}", rule.category.as_str().style(style), rule.tooltip);
    }

    Ok(())
}

/// Find every registered rule's matches in the content.
fn collect_spans<'a>(
    content: &str,
    sink: &'a TerminalSink,
) -> anyhow::Result<Vec<(Range<usize>, &'a AnnotationRule)>> {
    let mut spans = Vec::new();
    for (_, rule) in &sink.rules {
        let found = rule
            .find_spans(content)
            .with_context(|| format!("registered {} rule failed to scan", rule.category))?;
        spans.extend(found.into_iter().map(|span| (span, rule)));
    }
    Ok(spans)
}

/// Drop spans that overlap an earlier (already sorted) span. First match wins.
fn drop_overlaps<T>(spans: Vec<(Range<usize>, T)>) -> Vec<(Range<usize>, T)> {
    let mut kept: Vec<(Range<usize>, T)> = Vec::with_capacity(spans.len());
    for (range, rule) in spans {
        if kept.last().is_none_or(|(prev, _)| prev.end <= range.start) {
            kept.push((range, rule));
        }
    }
    kept
}

/// Print the content with each span painted in its rule's style.
fn render(content: &str, spans: &[(Range<usize>, &AnnotationRule)]) {
    let mut cursor = 0;
    for (range, rule) in spans {
        print!("{}", &content[cursor..range.start]);
        let style = terminal_style(rule);
        print!("{}", (&content[range.clone()]).style(style));
        cursor = range.end;
    }
    print!("{}", &content[cursor..]);
    if !content.ends_with('\n') {
        println!();
    }
}

/// Translate an annotation style to a terminal style.
fn terminal_style(rule: &AnnotationRule) -> Style {
    let mut style = Style::new().color(ansi_color(&rule.style.color));
    if rule.style.underline {
        style = style.underline();
    }
    style
}

/// Map a configured color name to an ANSI color, defaulting to yellow.
fn ansi_color(name: &str) -> AnsiColors {
    match name.to_ascii_lowercase().as_str() {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        _ => AnsiColors::Yellow,
    }
}
