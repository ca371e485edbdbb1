//! Inline suppression directives.
//!
//! Parses HTML comments in the form:
//! - `<!-- writegood disable weasel,passive -->` — suppress checkers until re-enabled
//! - `<!-- writegood enable weasel,passive -->` — re-enable previously suppressed checkers
//! - `<!-- writegood disable-next-line duplicates -->` — suppress for the next line only
//!
//! Directive names are the checker categories: `weasel`, `passive`,
//! `duplicates`. Directives are parsed from the raw input, so they work the
//! same in plain text and markdown.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*writegood\s+(disable|enable|disable-next-line)\s+([\w,\s]+?)\s*-->")
        .expect("valid regex")
});

/// Map of checker names to their suppressed line ranges (1-indexed, inclusive).
///
/// A checker present in this map with an empty vec means "file-level
/// suppression" (disable without a matching enable).
#[derive(Debug, Clone, Default)]
pub struct SuppressionMap {
    /// checker name → list of suppressed line ranges (start, end) inclusive.
    suppressed: HashMap<String, Vec<(usize, usize)>>,
}

impl SuppressionMap {
    /// Returns `true` if the given checker is suppressed at the given line.
    pub fn is_suppressed(&self, checker: &str, line: usize) -> bool {
        match self.suppressed.get(checker) {
            None => false,
            Some(ranges) => {
                if ranges.is_empty() {
                    return true; // File-level suppression
                }
                ranges
                    .iter()
                    .any(|(start, end)| line >= *start && line <= *end)
            }
        }
    }

    /// Returns `true` if the given checker is suppressed for the entire document.
    pub fn is_fully_suppressed(&self, checker: &str) -> bool {
        matches!(self.suppressed.get(checker), Some(ranges) if ranges.is_empty())
    }

    /// Returns `true` if no suppressions exist.
    pub fn is_empty(&self) -> bool {
        self.suppressed.is_empty()
    }
}

/// Parse suppression directives from raw input text.
pub fn parse_suppressions(input: &str) -> SuppressionMap {
    let mut map = SuppressionMap::default();
    let mut open: HashMap<String, usize> = HashMap::new();

    for (line_idx, line_text) in input.lines().enumerate() {
        let line_num = line_idx + 1;

        for cap in DIRECTIVE.captures_iter(line_text) {
            let action = &cap[1];
            let checkers: Vec<String> = cap[2]
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            match action {
                "disable" => {
                    for checker in &checkers {
                        open.insert(checker.clone(), line_num);
                    }
                }
                "enable" => {
                    for checker in &checkers {
                        if let Some(start) = open.remove(checker.as_str()) {
                            map.suppressed
                                .entry(checker.clone())
                                .or_default()
                                .push((start, line_num));
                        }
                    }
                }
                "disable-next-line" => {
                    let next_line = line_num + 1;
                    for checker in &checkers {
                        map.suppressed
                            .entry(checker.clone())
                            .or_default()
                            .push((next_line, next_line));
                    }
                }
                _ => {}
            }
        }
    }

    // Unclosed disable → file-level suppression (empty ranges).
    for (checker, _start) in open {
        map.suppressed.entry(checker).or_default().clear();
    }

    map
}
