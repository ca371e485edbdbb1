//! Scan pattern construction.
//!
//! Each checker's pattern is derived from its word list by alternation-joining
//! the entries into a single group wrapped in word-boundary anchors. Patterns
//! are rebuilt whenever a checker is constructed, so list edits can never leave
//! a stale pattern behind.

/// Characters allowed between a to-be verb and its participle, and between
/// the two halves of a duplicated word: whitespace and quote punctuation.
///
/// Quoted speech between verb and participle still counts as passive
/// ("was 'really' broken"). Anything outside this class (commas, periods,
/// intervening words) breaks the construction.
pub const SEPARATOR_CLASS: &str = "[\\s'\"`]";

/// Join word-list entries into a single alternation fragment.
///
/// Entries are regex fragments by contract, so they are inserted verbatim.
fn alternation<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("|")
}

fn prefix(case_insensitive: bool) -> &'static str {
    if case_insensitive { "(?i)" } else { "" }
}

/// Build the weasel-word scan pattern.
///
/// The whole alternation group is anchored to word boundaries, so multi-word
/// phrase entries are boundary-anchored as a phrase, not per word.
pub fn weasel_pattern<S: AsRef<str>>(words: &[S], case_insensitive: bool) -> String {
    format!(
        "{}\\b(?:{})\\b",
        prefix(case_insensitive),
        alternation(words)
    )
}

/// Build the passive-voice scan pattern.
///
/// Shape: `\b(verb-alternation) separator+ (participle-alternation)\b`.
/// Capture group 1 is the auxiliary, group 2 the participle.
pub fn passive_pattern<S: AsRef<str>>(
    verbs: &[S],
    participles: &[S],
    case_insensitive: bool,
) -> String {
    format!(
        "{}\\b({}){}+({})\\b",
        prefix(case_insensitive),
        alternation(verbs),
        SEPARATOR_CLASS,
        alternation(participles)
    )
}

/// Build the duplicate-word scan pattern.
///
/// A self-referential group: `\b(word) separator+ \1 \b`, always
/// case-insensitive. Requires a backtracking engine (`fancy_regex`); the
/// streaming scanner in [`crate::check::duplicate`] is the
/// backreference-free equivalent.
pub fn duplicate_pattern() -> String {
    format!("(?i)\\b(\\w+){SEPARATOR_CLASS}+\\1\\b")
}
