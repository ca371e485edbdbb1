//! Core library for writegood.
//!
//! A lightweight writing-style linter for English prose. Three independent
//! checkers scan text for stylistic issues and report their locations:
//!
//! - [`check::weasel`] - vague or hedging words ("very", "various")
//! - [`check::passive`] - to-be verb + past participle constructions
//! - [`check::duplicate`] - the same word repeated in immediate succession
//!
//! The [`highlight`] module binds the three checkers to a rendering layer as
//! annotation rules for live inline flagging; the [`lint`] module runs them
//! in batch over file content.
//!
//! # Quick Start
//!
//! ```
//! use writegood_core::check::WeaselChecker;
//!
//! let checker = WeaselChecker::with_defaults();
//! let matches = checker.check("This was very clearly written.");
//! assert_eq!(matches.len(), 2);
//! ```
#![deny(unsafe_code)]

pub mod check;
pub mod config;
pub mod directives;
pub mod error;
pub mod highlight;
pub mod lint;
pub mod markdown;
pub mod pattern;
pub mod rules;
pub mod text;
pub mod word_lists;

pub use check::{Category, DuplicateChecker, PassiveChecker, WeaselChecker};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{CheckError, CheckResult, ConfigError, ConfigResult};
pub use highlight::{AnnotationRule, AnnotationSink, LiveHighlight, RuleHandle};
pub use lint::{StyleReport, run_style_check};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
