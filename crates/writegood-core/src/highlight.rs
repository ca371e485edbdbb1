//! Live-highlight coordination.
//!
//! Binds the three checkers to a rendering layer as annotation rules so
//! matches are visually flagged as a buffer is edited. The rendering layer is
//! an external collaborator behind the [`AnnotationSink`] trait; this module
//! owns which buffers have live mode on and which rule handles belong to it,
//! so disabling removes exactly its own rules and nothing else.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::check::Category;
use crate::config::Config;
use crate::error::{CheckError, CheckResult};
use crate::pattern;

/// Visual style attached to an annotation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Named color for the highlight (e.g., "yellow").
    pub color: String,
    /// Whether to underline the span.
    pub underline: bool,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: "yellow".to_string(),
            underline: true,
        }
    }
}

impl AnnotationStyle {
    /// Default style for a category.
    pub fn for_category(category: Category) -> Self {
        let color = match category {
            Category::Weasel => "yellow",
            Category::Passive => "cyan",
            Category::Duplicates => "magenta",
        };
        Self {
            color: color.to_string(),
            underline: true,
        }
    }
}

/// Default tooltip text for a category.
pub const fn default_tooltip(category: Category) -> &'static str {
    match category {
        Category::Weasel => "Weasel word: vague or hedging, consider removing",
        Category::Passive => "Passive voice: consider rewriting in active voice",
        Category::Duplicates => "Duplicate word",
    }
}

/// A (pattern, style, tooltip) triple registered with the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnnotationRule {
    /// The checker category this rule belongs to.
    pub category: Category,
    /// The compiled-pattern source text to highlight.
    pub pattern: String,
    /// Visual style for matched spans.
    pub style: AnnotationStyle,
    /// Tooltip shown on matched spans.
    pub tooltip: String,
}

impl AnnotationRule {
    /// Find every span of this rule's pattern in `text`, for rendering.
    ///
    /// Compiles the pattern per call: rules are rendering-layer data, not
    /// long-lived scanners, and the rendering layer owns any caching.
    pub fn find_spans(&self, text: &str) -> CheckResult<Vec<Range<usize>>> {
        match self.category {
            Category::Duplicates => {
                let re = fancy_regex::Regex::new(&self.pattern)
                    .map_err(|e| CheckError::Backref(Box::new(e)))?;
                let mut spans = Vec::new();
                for m in re.find_iter(text) {
                    let m = m.map_err(|e| CheckError::Backref(Box::new(e)))?;
                    spans.push(m.start()..m.end());
                }
                Ok(spans)
            }
            Category::Weasel | Category::Passive => {
                let re = regex::Regex::new(&self.pattern)
                    .map_err(|e| CheckError::pattern(self.category.as_str(), e))?;
                Ok(re.find_iter(text).map(|m| m.start()..m.end()).collect())
            }
        }
    }
}

/// Stable, sink-assigned identity of a registered rule.
///
/// Removal goes through handles rather than value equality, so regenerating a
/// pattern from an edited word list can never orphan or mis-remove a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RuleHandle(pub u64);

/// The rendering layer: anything that can attach a styled, tooltipped
/// annotation rule to a buffer and later detach it by handle.
pub trait AnnotationSink {
    /// Register a rule, returning its stable handle.
    fn add_rule(&mut self, rule: &AnnotationRule) -> RuleHandle;

    /// Remove a rule by handle. Returns `false` if the handle is unknown.
    fn remove_rule(&mut self, handle: RuleHandle) -> bool;
}

/// Build the three annotation rules from the configuration in force.
///
/// Patterns are regenerated from the current word lists on every call, so
/// list edits are picked up on the next enable. Each pattern is compiled once
/// here to surface malformed list entries before anything is registered.
pub fn build_rules(config: &Config) -> CheckResult<Vec<AnnotationRule>> {
    let weasel = pattern::weasel_pattern(&config.weasel_words(), config.case_insensitive);
    regex::Regex::new(&weasel).map_err(|e| CheckError::pattern("weasel", e))?;

    let passive = pattern::passive_pattern(
        &config.passive_verbs(),
        &config.passive_participles(),
        config.case_insensitive,
    );
    regex::Regex::new(&passive).map_err(|e| CheckError::pattern("passive", e))?;

    let duplicate = pattern::duplicate_pattern();
    fancy_regex::Regex::new(&duplicate).map_err(|e| CheckError::Backref(Box::new(e)))?;

    Ok(vec![
        AnnotationRule {
            category: Category::Weasel,
            pattern: weasel,
            style: config.styles.weasel.clone(),
            tooltip: config.tooltips.weasel.clone(),
        },
        AnnotationRule {
            category: Category::Passive,
            pattern: passive,
            style: config.styles.passive.clone(),
            tooltip: config.tooltips.passive.clone(),
        },
        AnnotationRule {
            category: Category::Duplicates,
            pattern: duplicate,
            style: config.styles.duplicates.clone(),
            tooltip: config.tooltips.duplicates.clone(),
        },
    ])
}

/// Per-buffer live-highlight registry.
///
/// Keyed by buffer identity (`B` is whatever the host uses to name buffers),
/// holding the category-to-handle mapping for each enabled buffer. State is
/// explicit: nothing here depends on ambient globals.
#[derive(Debug)]
pub struct LiveHighlight<B> {
    rules: Vec<AnnotationRule>,
    enabled: HashMap<B, HashMap<Category, RuleHandle>>,
    global: bool,
}

impl<B: Eq + Hash> LiveHighlight<B> {
    /// Create a registry over a fixed set of annotation rules
    /// (normally the three from [`build_rules`]).
    pub fn new(rules: Vec<AnnotationRule>) -> Self {
        Self {
            rules,
            enabled: HashMap::new(),
            global: false,
        }
    }

    /// The rules this registry registers on enable.
    pub fn rules(&self) -> &[AnnotationRule] {
        &self.rules
    }

    /// Returns `true` if live mode is on for the buffer.
    pub fn is_enabled(&self, buffer: &B) -> bool {
        self.enabled.contains_key(buffer)
    }

    /// Whether the global variant is on.
    pub const fn global(&self) -> bool {
        self.global
    }

    /// Turn the global variant on or off. Affects buffers announced through
    /// [`on_buffer_created`](Self::on_buffer_created) afterwards; already
    /// enabled buffers are left alone.
    pub const fn set_global(&mut self, on: bool) {
        self.global = on;
    }

    /// Enable live mode for a buffer, registering one rule per category.
    ///
    /// Idempotent: returns `false` without touching the sink when the buffer
    /// is already enabled.
    #[tracing::instrument(skip(self, sink))]
    pub fn enable(&mut self, buffer: B, sink: &mut dyn AnnotationSink) -> bool
    where
        B: std::fmt::Debug,
    {
        if self.enabled.contains_key(&buffer) {
            tracing::debug!("live highlight already enabled");
            return false;
        }
        let handles = self
            .rules
            .iter()
            .map(|rule| (rule.category, sink.add_rule(rule)))
            .collect();
        self.enabled.insert(buffer, handles);
        true
    }

    /// Disable live mode for a buffer, removing exactly the handles this
    /// registry registered — unrelated annotations survive.
    ///
    /// A no-op returning `false` when the buffer was never enabled.
    #[tracing::instrument(skip(self, sink))]
    pub fn disable(&mut self, buffer: &B, sink: &mut dyn AnnotationSink) -> bool
    where
        B: std::fmt::Debug,
    {
        let Some(handles) = self.enabled.remove(buffer) else {
            tracing::debug!("live highlight was not enabled");
            return false;
        };
        for (_, handle) in handles {
            sink.remove_rule(handle);
        }
        true
    }

    /// Announce a newly created buffer. Enables it when the global variant
    /// is on.
    pub fn on_buffer_created(&mut self, buffer: B, sink: &mut dyn AnnotationSink) -> bool
    where
        B: std::fmt::Debug,
    {
        self.global && self.enable(buffer, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recording sink: keeps registered rules keyed by handle.
    #[derive(Default)]
    struct MockSink {
        next: u64,
        rules: HashMap<RuleHandle, AnnotationRule>,
    }

    impl AnnotationSink for MockSink {
        fn add_rule(&mut self, rule: &AnnotationRule) -> RuleHandle {
            let handle = RuleHandle(self.next);
            self.next += 1;
            self.rules.insert(handle, rule.clone());
            handle
        }

        fn remove_rule(&mut self, handle: RuleHandle) -> bool {
            self.rules.remove(&handle).is_some()
        }
    }

    fn registry() -> LiveHighlight<String> {
        LiveHighlight::new(build_rules(&Config::default()).unwrap())
    }

    #[test]
    fn enable_registers_one_rule_per_category() {
        let mut lh = registry();
        let mut sink = MockSink::default();
        assert!(lh.enable("a.md".to_string(), &mut sink));
        assert_eq!(sink.rules.len(), 3);
        let categories: std::collections::HashSet<Category> =
            sink.rules.values().map(|r| r.category).collect();
        assert_eq!(categories.len(), 3);
    }

    #[test]
    fn enable_twice_is_idempotent() {
        let mut lh = registry();
        let mut sink = MockSink::default();
        assert!(lh.enable("a.md".to_string(), &mut sink));
        assert!(!lh.enable("a.md".to_string(), &mut sink));
        assert_eq!(sink.rules.len(), 3);
    }

    #[test]
    fn disable_without_enable_is_noop() {
        let mut lh = registry();
        let mut sink = MockSink::default();
        assert!(!lh.disable(&"a.md".to_string(), &mut sink));
        assert!(sink.rules.is_empty());
    }

    #[test]
    fn round_trip_restores_sink_state() {
        let mut lh = registry();
        let mut sink = MockSink::default();

        // Pre-existing, unrelated annotation rule.
        let unrelated = AnnotationRule {
            category: Category::Weasel,
            pattern: "unrelated".to_string(),
            style: AnnotationStyle::default(),
            tooltip: "not ours".to_string(),
        };
        let unrelated_handle = sink.add_rule(&unrelated);

        lh.enable("a.md".to_string(), &mut sink);
        assert_eq!(sink.rules.len(), 4);
        lh.disable(&"a.md".to_string(), &mut sink);

        assert_eq!(sink.rules.len(), 1);
        assert!(sink.rules.contains_key(&unrelated_handle));
    }

    #[test]
    fn per_buffer_state_is_independent() {
        let mut lh = registry();
        let mut sink = MockSink::default();
        lh.enable("a.md".to_string(), &mut sink);
        lh.enable("b.md".to_string(), &mut sink);
        assert_eq!(sink.rules.len(), 6);

        lh.disable(&"a.md".to_string(), &mut sink);
        assert_eq!(sink.rules.len(), 3);
        assert!(!lh.is_enabled(&"a.md".to_string()));
        assert!(lh.is_enabled(&"b.md".to_string()));
    }

    #[test]
    fn global_mode_enables_new_buffers() {
        let mut lh = registry();
        let mut sink = MockSink::default();

        assert!(!lh.on_buffer_created("a.md".to_string(), &mut sink));
        lh.set_global(true);
        assert!(lh.on_buffer_created("b.md".to_string(), &mut sink));
        assert!(!lh.is_enabled(&"a.md".to_string()));
        assert!(lh.is_enabled(&"b.md".to_string()));
    }

    #[test]
    fn rules_find_their_own_spans() {
        let lh = registry();
        let text = "the the cat was broken, very much";
        for rule in lh.rules() {
            let spans = rule.find_spans(text).unwrap();
            assert_eq!(spans.len(), 1, "category: {}", rule.category);
            let matched = &text[spans[0].clone()];
            match rule.category {
                Category::Weasel => assert_eq!(matched, "very"),
                Category::Passive => assert_eq!(matched, "was broken"),
                Category::Duplicates => assert_eq!(matched, "the the"),
            }
        }
    }

    #[test]
    fn rules_carry_styles_and_tooltips() {
        let lh = registry();
        let weasel = lh
            .rules()
            .iter()
            .find(|r| r.category == Category::Weasel)
            .unwrap();
        assert!(!weasel.tooltip.is_empty());
        assert!(!weasel.style.color.is_empty());
    }
}
