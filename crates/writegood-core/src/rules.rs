//! Rule resolution engine.
//!
//! Matches file paths against configured glob rules and accumulates
//! checker configurations. When multiple rules match, all contribute
//! their checkers. Conflicts (same checker in multiple rules) are resolved
//! by specificity: the pattern with more literal (non-wildcard) path
//! segments wins. Ties go to the earlier rule.

use globset::{Glob, GlobMatcher};

use crate::config::{DuplicatesRuleConfig, PassiveRuleConfig, Rule, RuleChecks, WeaselRuleConfig};

/// Compiled rule set for efficient matching.
pub struct RuleSet {
    compiled: Vec<CompiledRule>,
}

/// A single rule with pre-compiled glob matchers.
struct CompiledRule {
    matchers: Vec<(GlobMatcher, usize)>, // (matcher, specificity)
    checks: RuleChecks,
}

/// Accumulated checker configurations after rule resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolvedChecks {
    /// Resolved weasel checker configuration.
    pub weasel: Option<WeaselRuleConfig>,
    /// Resolved passive checker configuration.
    pub passive: Option<PassiveRuleConfig>,
    /// Resolved duplicates checker configuration.
    pub duplicates: Option<DuplicatesRuleConfig>,
}

impl ResolvedChecks {
    /// Returns `true` if no checkers are configured.
    pub const fn is_empty(&self) -> bool {
        self.weasel.is_none() && self.passive.is_none() && self.duplicates.is_none()
    }

    /// A resolution that runs all three checkers with default settings.
    ///
    /// Used when no rules are configured at all: the linter checks
    /// everything rather than nothing.
    pub fn all_default() -> Self {
        Self {
            weasel: Some(WeaselRuleConfig::default()),
            passive: Some(PassiveRuleConfig::default()),
            duplicates: Some(DuplicatesRuleConfig::default()),
        }
    }
}

/// Count literal (non-wildcard) path segments in a glob pattern.
///
/// `docs/decisions/*.md` → 2 (`docs`, `decisions`)
/// `docs/**/*.md` → 1 (`docs`)
/// `**/*.md` → 0
fn specificity(pattern: &str) -> usize {
    pattern
        .split('/')
        .filter(|seg| !seg.contains('*') && !seg.contains('?') && !seg.contains('['))
        .count()
}

impl RuleSet {
    /// Compile a list of rules into a `RuleSet`.
    ///
    /// Invalid glob patterns are silently skipped with a tracing warning.
    pub fn compile(rules: &[Rule]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| {
                let matchers: Vec<(GlobMatcher, usize)> = rule
                    .paths
                    .iter()
                    .filter_map(|pattern| match Glob::new(pattern) {
                        Ok(glob) => Some((glob.compile_matcher(), specificity(pattern))),
                        Err(e) => {
                            tracing::warn!(pattern, error = %e, "skipping invalid glob pattern");
                            None
                        }
                    })
                    .collect();
                if matchers.is_empty() {
                    None
                } else {
                    Some(CompiledRule {
                        matchers,
                        checks: rule.checks.clone(),
                    })
                }
            })
            .collect();
        Self { compiled }
    }

    /// Resolve which checkers apply to a file path.
    ///
    /// All matching rules contribute. When two rules configure the same
    /// checker, the one matched by the higher-specificity pattern wins.
    /// Ties go to the earlier rule (lower index).
    pub fn resolve(&self, file_path: &str) -> ResolvedChecks {
        let mut result = ResolvedChecks::default();

        // Track the specificity of the winning rule for each checker.
        let mut weasel_spec: Option<usize> = None;
        let mut passive_spec: Option<usize> = None;
        let mut duplicates_spec: Option<usize> = None;

        for rule in &self.compiled {
            let max_spec = rule
                .matchers
                .iter()
                .filter(|(m, _)| m.is_match(file_path))
                .map(|(_, s)| *s)
                .max();

            let Some(spec) = max_spec else {
                continue;
            };

            if rule.checks.weasel.is_some() && weasel_spec.is_none_or(|prev| spec > prev) {
                result.weasel = rule.checks.weasel.clone();
                weasel_spec = Some(spec);
            }
            if rule.checks.passive.is_some() && passive_spec.is_none_or(|prev| spec > prev) {
                result.passive = rule.checks.passive.clone();
                passive_spec = Some(spec);
            }
            if rule.checks.duplicates.is_some() && duplicates_spec.is_none_or(|prev| spec > prev) {
                result.duplicates = rule.checks.duplicates.clone();
                duplicates_spec = Some(spec);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rules(specs: &[(&[&str], RuleChecks)]) -> Vec<Rule> {
        specs
            .iter()
            .map(|(paths, checks)| Rule {
                paths: paths.iter().map(|s| (*s).to_string()).collect(),
                checks: checks.clone(),
            })
            .collect()
    }

    #[test]
    fn specificity_counts_literal_segments() {
        assert_eq!(specificity("**/*.md"), 0);
        assert_eq!(specificity("docs/**/*.md"), 1);
        assert_eq!(specificity("docs/decisions/*.md"), 2);
        assert_eq!(specificity("README.md"), 1);
    }

    #[test]
    fn no_rules_returns_empty() {
        let set = RuleSet::compile(&[]);
        let resolved = set.resolve("anything.md");
        assert!(resolved.is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let rules = make_rules(&[(
            &["docs/**/*.md"],
            RuleChecks {
                weasel: Some(WeaselRuleConfig::default()),
                ..Default::default()
            },
        )]);
        let set = RuleSet::compile(&rules);
        let resolved = set.resolve("src/main.rs");
        assert!(resolved.is_empty());
    }

    #[test]
    fn single_match_returns_checkers() {
        let rules = make_rules(&[(
            &["docs/**/*.md"],
            RuleChecks {
                weasel: Some(WeaselRuleConfig {
                    extend_words: Some(vec!["basically".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )]);
        let set = RuleSet::compile(&rules);
        let resolved = set.resolve("docs/guide.md");
        assert!(resolved.weasel.is_some());
        assert_eq!(
            resolved.weasel.unwrap().extend_words,
            Some(vec!["basically".to_string()])
        );
    }

    #[test]
    fn accumulates_different_checkers_from_multiple_rules() {
        let rules = make_rules(&[
            (
                &["docs/**/*.md"],
                RuleChecks {
                    weasel: Some(WeaselRuleConfig::default()),
                    ..Default::default()
                },
            ),
            (
                &["docs/decisions/*.md"],
                RuleChecks {
                    passive: Some(PassiveRuleConfig::default()),
                    ..Default::default()
                },
            ),
        ]);
        let set = RuleSet::compile(&rules);
        let resolved = set.resolve("docs/decisions/001.md");
        assert!(resolved.weasel.is_some());
        assert!(resolved.passive.is_some());
    }

    #[test]
    fn specific_rule_overrides_general_for_same_checker() {
        let rules = make_rules(&[
            (
                &["docs/**/*.md"],
                RuleChecks {
                    weasel: Some(WeaselRuleConfig {
                        extend_words: Some(vec!["general".to_string()]),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            ),
            (
                &["docs/designs/*.md"],
                RuleChecks {
                    weasel: Some(WeaselRuleConfig {
                        extend_words: Some(vec!["specific".to_string()]),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            ),
        ]);
        let set = RuleSet::compile(&rules);
        let resolved = set.resolve("docs/designs/api.md");
        assert_eq!(
            resolved.weasel.unwrap().extend_words,
            Some(vec!["specific".to_string()])
        );
    }

    #[test]
    fn equal_specificity_earlier_rule_wins() {
        let rules = make_rules(&[
            (
                &["docs/*.md"],
                RuleChecks {
                    duplicates: Some(DuplicatesRuleConfig {
                        span_punctuation: Some(true),
                    }),
                    ..Default::default()
                },
            ),
            (
                &["docs/*.md"],
                RuleChecks {
                    duplicates: Some(DuplicatesRuleConfig {
                        span_punctuation: Some(false),
                    }),
                    ..Default::default()
                },
            ),
        ]);
        let set = RuleSet::compile(&rules);
        let resolved = set.resolve("docs/guide.md");
        assert_eq!(
            resolved.duplicates.unwrap().span_punctuation,
            Some(true)
        );
    }

    #[test]
    fn multiple_paths_in_single_rule() {
        let rules = make_rules(&[(
            &["README.md", "docs/**/*.md"],
            RuleChecks {
                weasel: Some(WeaselRuleConfig::default()),
                ..Default::default()
            },
        )]);
        let set = RuleSet::compile(&rules);
        assert!(set.resolve("README.md").weasel.is_some());
        assert!(set.resolve("docs/guide.md").weasel.is_some());
        assert!(set.resolve("src/main.rs").weasel.is_none());
    }

    #[test]
    fn invalid_glob_skipped_gracefully() {
        let rules = make_rules(&[(
            &["[invalid", "docs/*.md"],
            RuleChecks {
                weasel: Some(WeaselRuleConfig::default()),
                ..Default::default()
            },
        )]);
        let set = RuleSet::compile(&rules);
        assert!(set.resolve("docs/guide.md").weasel.is_some());
    }

    #[test]
    fn all_default_runs_everything() {
        let resolved = ResolvedChecks::all_default();
        assert!(resolved.weasel.is_some());
        assert!(resolved.passive.is_some());
        assert!(resolved.duplicates.is_some());
    }
}
