//! Lint execution engine.
//!
//! Runs the checkers specified by [`ResolvedChecks`] against file content,
//! applying project-wide config defaults where rule-level settings are
//! absent, then filters matches through inline suppression directives and
//! (for markdown input) prose spans.

use std::ops::Range;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::check::{
    Category, DuplicateChecker, DuplicateReport, PassiveChecker, PassiveReport, WeaselChecker,
    WeaselReport,
};
use crate::config::Config;
use crate::directives::{self, SuppressionMap};
use crate::error::CheckResult;
use crate::markdown;
use crate::rules::ResolvedChecks;

/// Combined results from all checkers run by the lint engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StyleReport {
    /// The file that was checked.
    pub file: String,
    /// Weasel-word report, if the weasel checker was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weasel: Option<WeaselReport>,
    /// Passive-voice report, if the passive checker was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive: Option<PassiveReport>,
    /// Duplicate-word report, if the duplicates checker was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<DuplicateReport>,
    /// Overall pass/fail. `true` only if every configured checker found
    /// nothing unsuppressed.
    pub pass: bool,
}

impl StyleReport {
    /// Total number of reported matches across all checkers.
    pub fn total(&self) -> usize {
        self.weasel.as_ref().map_or(0, |r| r.count)
            + self.passive.as_ref().map_or(0, |r| r.count)
            + self.duplicates.as_ref().map_or(0, |r| r.count)
    }
}

/// Run the checkers specified by `resolved` against `content`.
///
/// Settings cascade: rule-level overrides config-level defaults.
/// The `file_path` selects markdown handling (`.md` input is filtered to
/// prose spans) and is echoed in the report.
#[tracing::instrument(skip(content, resolved, config), fields(file = file_path, len = content.len()))]
pub fn run_style_check(
    file_path: &str,
    content: &str,
    resolved: &ResolvedChecks,
    config: &Config,
) -> CheckResult<StyleReport> {
    let prose = if file_path.ends_with(".md") {
        Some(markdown::prose_spans(content))
    } else {
        None
    };
    let suppressions = directives::parse_suppressions(content);
    let filter = MatchFilter {
        prose: prose.as_deref(),
        suppressions: &suppressions,
    };

    let mut pass = true;

    // --- weasel ---
    let weasel = if let Some(ref wc) = resolved.weasel {
        let mut words = wc.words.clone().unwrap_or_else(|| config.weasel_words());
        if let Some(ref extra) = wc.extend_words {
            words.extend(extra.iter().cloned());
        }
        let checker = WeaselChecker::new(&words, config.case_insensitive)?;
        let matches: Vec<_> = checker
            .check(content)
            .into_iter()
            .filter(|m| filter.keep(Category::Weasel, m.line, m.start))
            .collect();
        let count = matches.len();
        pass &= count == 0;
        Some(WeaselReport { matches, count })
    } else {
        None
    };

    // --- passive ---
    let passive = if let Some(ref pc) = resolved.passive {
        let verbs = pc.verbs.clone().unwrap_or_else(|| config.passive_verbs());
        let participles = pc
            .participles
            .clone()
            .unwrap_or_else(|| config.passive_participles());
        let checker = PassiveChecker::new(&verbs, &participles, config.case_insensitive)?;
        let matches: Vec<_> = checker
            .check(content)
            .into_iter()
            .filter(|m| filter.keep(Category::Passive, m.line, m.start))
            .collect();
        let count = matches.len();
        pass &= count == 0;
        Some(PassiveReport { matches, count })
    } else {
        None
    };

    // --- duplicates ---
    let duplicates = if let Some(ref dc) = resolved.duplicates {
        let span_punctuation = dc
            .span_punctuation
            .unwrap_or(config.duplicates_span_punctuation);
        let checker = DuplicateChecker::new(span_punctuation)?;
        let matches: Vec<_> = checker
            .scan(content, None, None)
            .into_iter()
            .filter(|m| filter.keep(Category::Duplicates, m.line, m.start))
            .collect();
        let count = matches.len();
        pass &= count == 0;
        Some(DuplicateReport { matches, count })
    } else {
        None
    };

    Ok(StyleReport {
        file: file_path.to_string(),
        weasel,
        passive,
        duplicates,
        pass,
    })
}

/// Shared post-scan filter: prose spans and suppression directives.
struct MatchFilter<'a> {
    prose: Option<&'a [Range<usize>]>,
    suppressions: &'a SuppressionMap,
}

impl MatchFilter<'_> {
    fn keep(&self, category: Category, line: usize, start: usize) -> bool {
        if self
            .prose
            .is_some_and(|spans| !markdown::in_prose(spans, start))
        {
            return false;
        }
        !self.suppressions.is_suppressed(category.as_str(), line)
    }
}
