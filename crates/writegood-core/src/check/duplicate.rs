//! Duplicate-word detection.
//!
//! Two equivalent strategies over the same definition of "adjacent duplicate"
//! (identical words, case-insensitive, separated only by whitespace/quote
//! characters):
//!
//! - [`DuplicateChecker::scan`] — a streaming tokenizer walk comparing each
//!   word to its predecessor. A run of three identical words reports two
//!   matches. This is the batch-report strategy.
//! - [`DuplicateChecker::find_spans`] — a single self-referential
//!   backreference pattern (`\b(word) sep+ \1 \b`) compiled with
//!   `fancy_regex`, used for live inline highlighting where whole-pair spans
//!   are wanted.
//!
//! Punctuation between two instances of a word resets adjacency in both
//! strategies, so "the cat, cat sat" with default settings reports nothing.
//! Setting `span_punctuation` restores the looser historical behavior where
//! the streaming scanner ignores what sits in the gap.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult};
use crate::pattern;
use crate::text;

/// A located adjacent-duplicate occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DuplicateMatch {
    /// The duplicated word, lowercased.
    pub word: String,
    /// Byte offset where the reported span starts.
    ///
    /// The streaming scan reports the second occurrence; the backreference
    /// scan reports the whole pair.
    pub start: usize,
    /// Byte offset one past the end of the reported span.
    pub end: usize,
    /// 1-indexed line number of the reported span.
    pub line: usize,
}

/// Report of a duplicate-word scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DuplicateReport {
    /// Matches in document order.
    pub matches: Vec<DuplicateMatch>,
    /// Number of matches.
    pub count: usize,
}

/// Duplicate-word checker.
///
/// Always case-insensitive, per the definition of an adjacent duplicate.
#[derive(Debug)]
pub struct DuplicateChecker {
    re: fancy_regex::Regex,
    span_punctuation: bool,
}

impl DuplicateChecker {
    /// Build a checker.
    ///
    /// With `span_punctuation` set, the streaming scan treats any gap between
    /// two words as adjacency, not just whitespace/quote gaps.
    pub fn new(span_punctuation: bool) -> CheckResult<Self> {
        let re = fancy_regex::Regex::new(&pattern::duplicate_pattern())
            .map_err(|e| CheckError::Backref(Box::new(e)))?;
        Ok(Self {
            re,
            span_punctuation,
        })
    }

    /// Build a checker with the default (punctuation resets adjacency).
    pub fn with_defaults() -> Self {
        Self::new(false).expect("duplicate pattern compiles")
    }

    /// Streaming scan of a byte range, defaulting to the whole document.
    ///
    /// Tokenizes the range into words in document order and compares each to
    /// the immediately preceding word, case-insensitively. The "previous
    /// word" pointer always advances, so a run of three identical words
    /// reports two matches.
    #[tracing::instrument(skip_all, fields(text_len = content.len()))]
    pub fn scan(
        &self,
        content: &str,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Vec<DuplicateMatch> {
        let range = text::resolve_range(content, start, end);
        let base = range.start;
        let slice = &content[range];

        let tokens = text::tokenize(slice);
        let mut matches = Vec::new();

        for pair in tokens.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            let gap = &slice[prev.span.end..cur.span.start];
            let adjacent = self.span_punctuation || text::is_separator_gap(gap);
            if adjacent && prev.text.to_lowercase() == cur.text.to_lowercase() {
                let match_start = base + cur.span.start;
                matches.push(DuplicateMatch {
                    word: cur.text.to_lowercase(),
                    start: match_start,
                    end: base + cur.span.end,
                    line: text::line_of_offset(content, match_start),
                });
            }
        }

        matches
    }

    /// Backreference scan of a byte range, defaulting to the whole document.
    ///
    /// Each match spans a whole duplicated pair. Non-overlapping, so a run of
    /// three reports one span covering the first two words; use [`scan`] for
    /// sequential reporting.
    ///
    /// [`scan`]: Self::scan
    #[tracing::instrument(skip_all, fields(text_len = content.len()))]
    pub fn find_spans(
        &self,
        content: &str,
        start: Option<usize>,
        end: Option<usize>,
    ) -> CheckResult<Vec<DuplicateMatch>> {
        let range = text::resolve_range(content, start, end);
        let base = range.start;
        let slice = &content[range];

        let mut matches = Vec::new();
        for caps in self.re.captures_iter(slice) {
            let caps = caps.map_err(|e| CheckError::Backref(Box::new(e)))?;
            let whole = caps.get(0).expect("group 0 always present");
            let word = caps.get(1).expect("group 1 always present");
            let match_start = base + whole.start();
            matches.push(DuplicateMatch {
                word: word.as_str().to_lowercase(),
                start: match_start,
                end: base + whole.end(),
                line: text::line_of_offset(content, match_start),
            });
        }

        Ok(matches)
    }
}
