//! Passive-voice detection.
//!
//! Scans for a to-be verb immediately followed (across whitespace/quote
//! separators) by a listed past participle. This is whole-phrase
//! concatenation matching, not part-of-speech tagging: participles used
//! adjectivally ("the window was broken [state]") still match, a false
//! positive accepted in exchange for simplicity.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult};
use crate::pattern;
use crate::text;
use crate::word_lists::{IRREGULAR_PAST_PARTICIPLES, TO_BE_VERBS};

/// A located passive-voice construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PassiveMatch {
    /// The full matched phrase (e.g., "was written").
    pub text: String,
    /// The to-be verb (e.g., "was").
    pub auxiliary: String,
    /// The past participle (e.g., "written").
    pub participle: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// 1-indexed line number of the match.
    pub line: usize,
}

/// Report of a passive-voice scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PassiveReport {
    /// Matches in document order.
    pub matches: Vec<PassiveMatch>,
    /// Number of matches.
    pub count: usize,
}

/// Passive-voice checker over the compiled verb + participle pattern.
#[derive(Debug)]
pub struct PassiveChecker {
    re: Option<Regex>,
}

impl PassiveChecker {
    /// Build a checker from verb and participle lists.
    ///
    /// Either list being empty yields a checker that matches nothing.
    pub fn new<S: AsRef<str>>(
        verbs: &[S],
        participles: &[S],
        case_insensitive: bool,
    ) -> CheckResult<Self> {
        if verbs.is_empty() || participles.is_empty() {
            return Ok(Self { re: None });
        }
        let re = Regex::new(&pattern::passive_pattern(verbs, participles, case_insensitive))
            .map_err(|e| CheckError::pattern("passive", e))?;
        Ok(Self { re: Some(re) })
    }

    /// Build a checker over [`TO_BE_VERBS`] and [`IRREGULAR_PAST_PARTICIPLES`],
    /// case-insensitive.
    pub fn with_defaults() -> Self {
        Self::new(TO_BE_VERBS, IRREGULAR_PAST_PARTICIPLES, true).expect("default lists compile")
    }

    /// Scan the whole document.
    pub fn check(&self, content: &str) -> Vec<PassiveMatch> {
        self.check_range(content, None, None)
    }

    /// Scan a byte range, defaulting to the whole document.
    #[tracing::instrument(skip_all, fields(text_len = content.len()))]
    pub fn check_range(
        &self,
        content: &str,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Vec<PassiveMatch> {
        let Some(ref re) = self.re else {
            return Vec::new();
        };
        let range = text::resolve_range(content, start, end);
        let base = range.start;

        re.captures_iter(&content[range])
            .map(|caps| {
                let whole = caps.get(0).expect("group 0 always present");
                let match_start = base + whole.start();
                PassiveMatch {
                    text: whole.as_str().to_string(),
                    auxiliary: caps[1].to_string(),
                    participle: caps[2].to_string(),
                    start: match_start,
                    end: base + whole.end(),
                    line: text::line_of_offset(content, match_start),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_verb_followed_by_participle() {
        let checker = PassiveChecker::with_defaults();
        let matches = checker.check("The report was written by the team.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].auxiliary, "was");
        assert_eq!(matches[0].participle, "written");
        assert_eq!(matches[0].text, "was written");
    }

    #[test]
    fn non_participle_after_verb_does_not_match() {
        let checker = PassiveChecker::with_defaults();
        assert!(checker.check("The report was late.").is_empty());
    }

    #[test]
    fn every_to_be_conjugation_matches() {
        let checker = PassiveChecker::with_defaults();
        for verb in ["am", "is", "are", "was", "were", "be", "been", "being"] {
            let content = format!("It {verb} broken.");
            assert_eq!(checker.check(&content).len(), 1, "verb: {verb}");
        }
    }

    #[test]
    fn quoted_word_between_does_not_reset() {
        let checker = PassiveChecker::with_defaults();
        let matches = checker.check("it was \"broken\" again");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn intervening_adverb_blocks_the_match() {
        // Separator policy: only whitespace and quote characters may sit
        // between verb and participle.
        let checker = PassiveChecker::with_defaults();
        assert!(checker.check("This was very clearly written.").is_empty());
    }

    #[test]
    fn multiple_matches_in_order() {
        let checker = PassiveChecker::with_defaults();
        let matches = checker.check("It was written. It was broken. It was fixed.");
        // "fixed" is a regular -ed participle, not in the irregular inventory.
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].participle, "written");
        assert_eq!(matches[1].participle, "broken");
    }

    #[test]
    fn line_numbers_reported() {
        let checker = PassiveChecker::with_defaults();
        let matches = checker.check("Active sentence here.\nIt was stolen.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 2);
    }

    #[test]
    fn range_limits_the_scan() {
        let checker = PassiveChecker::with_defaults();
        let content = "It was taken. It was given.";
        let matches = checker.check_range(content, Some(13), None);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].participle, "given");
    }

    #[test]
    fn empty_lists_match_nothing() {
        let checker = PassiveChecker::new::<&str>(&[], &[], true).unwrap();
        assert!(checker.check("It was written.").is_empty());
    }

    #[test]
    fn custom_participle_list() {
        let checker = PassiveChecker::new(&["was"], &["obfuscated"], true).unwrap();
        assert_eq!(checker.check("It was obfuscated.").len(), 1);
        assert!(checker.check("It was written.").is_empty());
    }
}
