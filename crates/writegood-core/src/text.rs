//! Text utilities shared by the checkers.
//!
//! Offset-to-line mapping, range resolution, and word tokenization with byte
//! offsets. Checkers report byte spans into the original buffer, so nothing
//! here rewrites or normalizes the text.

use std::ops::Range;

/// 1-indexed line number containing the given byte offset.
pub fn line_of_offset(text: &str, offset: usize) -> usize {
    let clamped = offset.min(text.len());
    text[..clamped].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Resolve an optional start/end pair to a concrete scan range.
///
/// Absent bounds default to the whole document. Bounds are clamped to the
/// text length and snapped back to the nearest char boundary so a slice is
/// always valid. An inverted range collapses to empty.
pub fn resolve_range(text: &str, start: Option<usize>, end: Option<usize>) -> Range<usize> {
    let snap = |mut pos: usize| -> usize {
        pos = pos.min(text.len());
        while pos > 0 && !text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    };
    let start = snap(start.unwrap_or(0));
    let end = snap(end.unwrap_or(text.len()));
    start..end.max(start)
}

/// A word token with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word as it appears in the text.
    pub text: &'a str,
    /// Byte span of the word.
    pub span: Range<usize>,
}

/// Tokenize a text slice into words (`\w+` runs) in document order.
///
/// Spans are relative to `text`; callers scanning a sub-range add the range
/// start back themselves.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        match (start, is_word) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                tokens.push(Token {
                    text: &text[s..i],
                    span: s..i,
                });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &text[s..],
            span: s..text.len(),
        });
    }

    tokens
}

/// Returns `true` if the gap between two words contains only separator-class
/// characters (whitespace and quote punctuation).
///
/// Used by the streaming duplicate scanner to decide adjacency: any other
/// punctuation in the gap resets it, matching the backreference pattern's
/// separator class.
pub fn is_separator_gap(gap: &str) -> bool {
    !gap.is_empty()
        && gap
            .chars()
            .all(|c| c.is_whitespace() || c == '\'' || c == '"' || c == '`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_numbers_are_one_indexed() {
        let text = "first\nsecond\nthird";
        assert_eq!(line_of_offset(text, 0), 1);
        assert_eq!(line_of_offset(text, 6), 2);
        assert_eq!(line_of_offset(text, text.len()), 3);
    }

    #[test]
    fn absent_bounds_default_to_whole_document() {
        let text = "hello world";
        assert_eq!(resolve_range(text, None, None), 0..text.len());
    }

    #[test]
    fn bounds_are_clamped() {
        let text = "short";
        assert_eq!(resolve_range(text, Some(2), Some(999)), 2..5);
        assert_eq!(resolve_range(text, Some(4), Some(2)), 4..4);
    }

    #[test]
    fn range_snaps_to_char_boundary() {
        let text = "naïve";
        // Offset 3 lands inside the two-byte 'ï'.
        let range = resolve_range(text, Some(3), None);
        assert!(text.is_char_boundary(range.start));
    }

    #[test]
    fn tokenize_reports_spans() {
        let tokens = tokenize("the cat");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "the");
        assert_eq!(tokens[0].span, 0..3);
        assert_eq!(tokens[1].text, "cat");
        assert_eq!(tokens[1].span, 4..7);
    }

    #[test]
    fn tokenize_handles_punctuation_and_trailing_word() {
        let tokens = tokenize("one, two");
        assert_eq!(tokens[0].text, "one");
        assert_eq!(tokens[1].text, "two");
    }

    #[test]
    fn separator_gap_accepts_whitespace_and_quotes() {
        assert!(is_separator_gap(" "));
        assert!(is_separator_gap(" \"' "));
        assert!(!is_separator_gap(", "));
        assert!(!is_separator_gap(". "));
        assert!(!is_separator_gap(""));
    }
}
