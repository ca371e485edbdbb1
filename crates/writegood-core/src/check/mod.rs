//! Style checkers: weasel words, passive voice, duplicate words.
//!
//! The three checkers share one shape: a word list is compiled into a single
//! boundary-anchored alternation pattern at construction, and a scan walks a
//! text range linearly, reporting byte spans into the original buffer. No
//! checker depends on another's output.

pub mod duplicate;
pub mod passive;
pub mod weasel;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use duplicate::{DuplicateChecker, DuplicateMatch, DuplicateReport};
pub use passive::{PassiveChecker, PassiveMatch, PassiveReport};
pub use weasel::{WeaselChecker, WeaselMatch, WeaselReport};

/// The checker that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Category {
    /// Vague or hedging words.
    Weasel,
    /// To-be verb followed by a past participle.
    Passive,
    /// The same word repeated in immediate succession.
    Duplicates,
}

impl Category {
    /// The category name used in config keys, CLI output, and directives.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weasel => "weasel",
            Self::Passive => "passive",
            Self::Duplicates => "duplicates",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
