//! Weasel-word detection.
//!
//! Scans for a configurable list of vague or hedging words ("very",
//! "various", "a number of") that weaken a claim without adding information.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult};
use crate::pattern;
use crate::text;
use crate::word_lists::DEFAULT_WEASEL_WORDS;

/// A located weasel-word occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeaselMatch {
    /// The matched text.
    pub text: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// 1-indexed line number of the match.
    pub line: usize,
}

/// Report of a weasel-word scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeaselReport {
    /// Matches in document order.
    pub matches: Vec<WeaselMatch>,
    /// Number of matches.
    pub count: usize,
}

/// Weasel-word checker over a compiled word-list pattern.
///
/// The pattern is built once at construction from the word list in force;
/// rebuilding the checker after a list edit is how staleness is avoided.
#[derive(Debug)]
pub struct WeaselChecker {
    re: Option<Regex>,
}

impl WeaselChecker {
    /// Build a checker from a list of weasel-word regex fragments.
    ///
    /// An empty list yields a checker that matches nothing. A list entry the
    /// regex engine rejects surfaces as [`CheckError::Pattern`].
    pub fn new<S: AsRef<str>>(words: &[S], case_insensitive: bool) -> CheckResult<Self> {
        if words.is_empty() {
            return Ok(Self { re: None });
        }
        let re = Regex::new(&pattern::weasel_pattern(words, case_insensitive))
            .map_err(|e| CheckError::pattern("weasel", e))?;
        Ok(Self { re: Some(re) })
    }

    /// Build a checker over [`DEFAULT_WEASEL_WORDS`], case-insensitive.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_WEASEL_WORDS, true).expect("default word list compiles")
    }

    /// Scan the whole document.
    pub fn check(&self, content: &str) -> Vec<WeaselMatch> {
        self.check_range(content, None, None)
    }

    /// Scan a byte range, defaulting to the whole document.
    ///
    /// Reports every non-overlapping occurrence, leftmost-first. Offsets in
    /// the returned matches are relative to `content`, not the range.
    #[tracing::instrument(skip_all, fields(text_len = content.len()))]
    pub fn check_range(
        &self,
        content: &str,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Vec<WeaselMatch> {
        let Some(ref re) = self.re else {
            return Vec::new();
        };
        let range = text::resolve_range(content, start, end);
        let base = range.start;

        re.find_iter(&content[range])
            .map(|m| {
                let match_start = base + m.start();
                WeaselMatch {
                    text: m.as_str().to_string(),
                    start: match_start,
                    end: base + m.end(),
                    line: text::line_of_offset(content, match_start),
                }
            })
            .collect()
    }
}
