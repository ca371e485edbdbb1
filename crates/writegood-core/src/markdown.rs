//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Instead of rewriting the text (which would invalidate every
//! match offset), this module reports the byte ranges that hold prose, and
//! the lint engine drops matches that fall outside them.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Compute the byte ranges of prose text in a markdown document.
///
/// Excluded:
/// - Code blocks (fenced and indented) and inline code
/// - Headings (section titles are not prose)
/// - YAML frontmatter
///
/// Link text, blockquote text, list item text, and emphasized text all count
/// as prose. Ranges are sorted and non-overlapping.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn prose_spans(text: &str) -> Vec<Range<usize>> {
    let body_start = frontmatter_end(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut spans: Vec<Range<usize>> = Vec::new();
    let mut skip_depth: usize = 0;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(_) if skip_depth == 0 && range.start >= body_start => {
                // Coalesce with the previous span when contiguous
                if let Some(last) = spans.last_mut()
                    && last.end >= range.start
                {
                    last.end = last.end.max(range.end);
                } else {
                    spans.push(range);
                }
            }
            _ => {}
        }
    }

    spans
}

/// Returns `true` if the given byte offset falls inside a prose span.
pub fn in_prose(spans: &[Range<usize>], offset: usize) -> bool {
    spans.iter().any(|s| s.contains(&offset))
}

/// Byte offset where the document body starts, past any YAML frontmatter
/// delimited by `---` lines.
fn frontmatter_end(text: &str) -> usize {
    if !text.starts_with("---") {
        return 0;
    }
    let Some(close) = text[3..].find("\n---") else {
        return 0;
    };
    let after = 3 + close + 4;
    // Delimiter line must end the line
    match text[after..].find('\n') {
        Some(nl) if text[after..after + nl].trim().is_empty() => after + nl + 1,
        None => text.len(),
        _ => 0,
    }
}
